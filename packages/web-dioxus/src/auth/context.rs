//! Authentication context provider

use dioxus::prelude::*;

use api_client::SessionToken;

use super::server_fns::current_session;
use super::AuthSession;

/// Authentication context that provides session state to the entire app
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current session (if any)
    pub session: Signal<Option<AuthSession>>,
    /// Whether auth state is still loading
    pub loading: Signal<bool>,
}

impl AuthContext {
    /// Check if a session is established
    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_some()
    }

    /// Check if the session belongs to an admin
    pub fn is_admin(&self) -> bool {
        self.session
            .read()
            .as_ref()
            .map(|s| s.user.is_admin)
            .unwrap_or(false)
    }

    /// Bearer credential for the mutating endpoints
    pub fn token(&self) -> Option<SessionToken> {
        self.session
            .read()
            .as_ref()
            .map(|s| SessionToken::new(s.token.clone()))
    }

    /// Refresh the session state from the server
    pub async fn refresh(&self) {
        let mut session = self.session;
        let mut loading = self.loading;

        match current_session().await {
            Ok(current) => session.set(current),
            Err(_) => session.set(None),
        }
        loading.set(false);
    }

    /// Clear the session state (logout)
    pub fn clear(&self) {
        let mut session = self.session;
        session.set(None);
    }
}

/// Auth provider component that wraps the app
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let session = use_signal(|| None::<AuthSession>);
    let loading = use_signal(|| true);

    let auth = AuthContext { session, loading };

    use_context_provider(|| auth);

    // Load initial session state
    use_effect(move || {
        spawn(async move {
            auth.refresh().await;
        });
    });

    children
}

/// Hook to access the auth context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

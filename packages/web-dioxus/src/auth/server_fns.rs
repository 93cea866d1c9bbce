//! Server functions for authentication
//!
//! These run on the server and handle session management. Token issuance is
//! the API's job; this side only consumes the bearer token it returns.

use dioxus::prelude::*;

use super::AuthSession;

/// Exchange credentials for a session. The token comes from the API's
/// `/user/login`; its claims carry the admin flag.
#[server]
pub async fn login(email: String, password: String) -> Result<AuthSession, ServerFnError> {
    let url = std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());
    let client = api_client::HealthBookerClient::new(url);

    let response = client
        .login(&email, &password)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user = decode_jwt_to_user(&response.token, &email)?;
    let session = AuthSession {
        token: response.token,
        user,
    };

    set_session(&session).await?;
    Ok(session)
}

/// Get the current session, if one is established
#[server]
pub async fn current_session() -> Result<Option<AuthSession>, ServerFnError> {
    get_session().await
}

/// Logout - clear the session
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    clear_session().await
}

// ============================================================================
// Server-only helpers (not exposed as server functions)
// ============================================================================

#[cfg(feature = "server")]
fn decode_jwt_to_user(token: &str, email: &str) -> Result<super::AuthUser, ServerFnError> {
    // Base64-decode the payload; signature verification stays with the API
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(ServerFnError::new("Invalid JWT format"));
    }

    use base64::Engine;
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1])
        .map_err(|e| ServerFnError::new(format!("Failed to decode JWT: {}", e)))?;

    #[derive(serde::Deserialize)]
    struct JwtClaims {
        #[serde(rename = "userId")]
        user_id: String,
        #[serde(rename = "isAdmin", default)]
        is_admin: bool,
    }

    let claims: JwtClaims = serde_json::from_slice(&payload)
        .map_err(|e| ServerFnError::new(format!("Failed to parse JWT claims: {}", e)))?;

    Ok(super::AuthUser {
        user_id: claims.user_id,
        email: email.to_string(),
        is_admin: claims.is_admin,
    })
}

#[cfg(feature = "server")]
async fn set_session(session: &AuthSession) -> Result<(), ServerFnError> {
    use tower_sessions::Session;

    let store: Session = dioxus::fullstack::extract()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get session: {}", e)))?;

    store
        .insert("session", session)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to set session: {}", e)))?;

    Ok(())
}

#[cfg(feature = "server")]
async fn get_session() -> Result<Option<AuthSession>, ServerFnError> {
    use tower_sessions::Session;

    let store: Session = dioxus::fullstack::extract()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get session: {}", e)))?;

    store
        .get("session")
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get session data: {}", e)))
}

#[cfg(feature = "server")]
async fn clear_session() -> Result<(), ServerFnError> {
    use tower_sessions::Session;

    let store: Session = dioxus::fullstack::extract()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get session: {}", e)))?;

    store
        .flush()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to clear session: {}", e)))?;

    Ok(())
}

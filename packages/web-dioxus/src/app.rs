//! Root application component

use dioxus::prelude::*;

use crate::auth::AuthProvider;
use crate::components::{ConfirmProvider, ToastProvider};
use crate::routes::Route;

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/main.css") }

        // Toasts and the confirm dialog are app-wide overlays; auth context
        // wraps the router
        ToastProvider {
            ConfirmProvider {
                AuthProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}

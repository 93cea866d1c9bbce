//! Home page component

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::Route;

/// Home page - landing hero with entry points into the app
#[component]
pub fn Home() -> Element {
    let auth = use_auth();

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-emerald-50 to-white",

            header {
                class: "bg-white border-b border-gray-100",
                div {
                    class: "max-w-4xl mx-auto px-4 py-4 flex items-center justify-between",
                    span { class: "text-xl font-bold text-emerald-700", "HealthBooker" }
                    div {
                        class: "flex items-center gap-2",
                        if auth.is_authenticated() {
                            if auth.is_admin() {
                                Link {
                                    to: Route::AdminApplications {},
                                    class: "px-4 py-2 text-sm rounded-md text-emerald-700 hover:bg-emerald-50",
                                    "Admin"
                                }
                            }
                        } else {
                            Link {
                                to: Route::Login {},
                                class: "px-4 py-2 text-sm rounded-md text-gray-600 hover:bg-gray-100",
                                "Log in"
                            }
                            Link {
                                to: Route::Register {},
                                class: "px-4 py-2 text-sm rounded-md bg-emerald-600 text-white hover:bg-emerald-700",
                                "Sign up"
                            }
                        }
                    }
                }
            }

            main {
                class: "max-w-4xl mx-auto px-4 py-24 text-center",
                h1 {
                    class: "text-4xl font-bold text-gray-900 mb-4",
                    "Your health, our responsibility"
                }
                p {
                    class: "text-lg text-gray-600 mb-8",
                    "Book appointments with trusted doctors, or apply to join as a practitioner."
                }
                Link {
                    to: Route::Register {},
                    class: "inline-block px-6 py-3 bg-emerald-600 text-white rounded-lg hover:bg-emerald-700 transition-colors font-medium",
                    "Get started"
                }
            }
        }
    }
}

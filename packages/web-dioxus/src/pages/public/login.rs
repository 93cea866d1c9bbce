//! Login page component

use dioxus::prelude::*;

use crate::auth::{login, use_auth};
use crate::components::use_toaster;
use crate::routes::Route;

/// Sign-in page - consumes the API's bearer token and establishes a session
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();
    let toaster = use_toaster();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut is_pending = use_signal(|| false);

    let handle_submit = move |_| {
        let email_value = email().trim().to_string();
        let password_value = password();

        if email_value.is_empty() || password_value.is_empty() {
            toaster.error("Please enter email and password");
            return;
        }

        spawn(async move {
            is_pending.set(true);

            match login(email_value, password_value).await {
                Ok(session) => {
                    let is_admin = session.user.is_admin;
                    let mut current = auth.session;
                    current.set(Some(session));
                    toaster.success("User logged in successfully");

                    if is_admin {
                        navigator.push(Route::AdminApplications {});
                    } else {
                        navigator.push(Route::Home {});
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Login failed");
                    toaster.error("Unable to login user");
                }
            }

            is_pending.set(false);
        });
    };

    rsx! {
        section {
            class: "min-h-screen flex items-center justify-center bg-gradient-to-b from-emerald-50 to-white px-4",

            div {
                class: "bg-white rounded-lg shadow-md p-8 max-w-md w-full",

                h2 { class: "text-2xl font-bold text-gray-900 mb-6 text-center", "Sign In" }

                form {
                    class: "space-y-4",
                    onsubmit: handle_submit,

                    input {
                        r#type: "email",
                        placeholder: "Enter your email",
                        class: "w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-emerald-500",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                        disabled: is_pending()
                    }
                    input {
                        r#type: "password",
                        placeholder: "Enter your password",
                        class: "w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-emerald-500",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                        disabled: is_pending()
                    }

                    button {
                        r#type: "submit",
                        class: "w-full py-3 bg-emerald-600 text-white rounded-lg hover:bg-emerald-700 transition-colors font-medium disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: is_pending(),
                        if is_pending() {
                            "Signing in..."
                        } else {
                            "Sign In"
                        }
                    }
                }

                p {
                    class: "mt-4 text-sm text-center text-gray-600",
                    "Not a user? "
                    Link {
                        to: Route::Register {},
                        class: "text-emerald-700 hover:underline",
                        "Sign up"
                    }
                }
            }
        }
    }
}

//! Registration page component

use std::rc::Rc;

use dioxus::prelude::*;

use cloudinary::ImageFile;
use flows::{RegistrationDraft, RegistrationFlow, Submission};

use crate::api::ServerFnApi;
use crate::components::{use_toaster, ToastSink};
use crate::routes::Route;

/// File pickers hand us a name, not a MIME type; jpeg/png is all the
/// avatar upload accepts anyway.
fn content_type_for(filename: &str) -> &'static str {
    let lower = filename.to_ascii_lowercase();
    if lower.ends_with(".png") {
        "image/png"
    } else if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
        "image/jpeg"
    } else {
        "application/octet-stream"
    }
}

/// Sign-up page - collects a draft, uploads the avatar, submits it
#[component]
pub fn Register() -> Element {
    let navigator = use_navigator();
    let toaster = use_toaster();

    let mut draft = use_signal(RegistrationDraft::default);
    let mut uploading = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    let flow = use_hook(|| {
        Rc::new(RegistrationFlow::new(
            Rc::new(ServerFnApi),
            ServerFnApi,
            ToastSink(toaster),
        ))
    });

    let handle_file = {
        let flow = flow.clone();
        move |evt: Event<FormData>| {
            let flow = flow.clone();
            spawn(async move {
                let Some(file_engine) = evt.files() else {
                    return;
                };
                let Some(name) = file_engine.files().first().cloned() else {
                    return;
                };

                uploading.set(true);
                if let Some(bytes) = file_engine.read_file(&name).await {
                    let content_type = content_type_for(&name).to_string();
                    let mut updated = draft();
                    let picked = ImageFile {
                        filename: name,
                        content_type,
                        bytes,
                    };
                    if flow.upload_avatar(&mut updated, picked).await.is_ok() {
                        draft.set(updated);
                    }
                }
                uploading.set(false);
            });
        }
    };

    let handle_submit = {
        let flow = flow.clone();
        move |_evt: Event<FormData>| {
            if uploading() || submitting() {
                return;
            }
            let flow = flow.clone();
            spawn(async move {
                submitting.set(true);
                // only a completed registration leaves the form
                if let Ok(Submission::Completed) = flow.submit(&draft()).await {
                    navigator.push(Route::Login {});
                }
                submitting.set(false);
            });
        }
    };

    rsx! {
        section {
            class: "min-h-screen flex items-center justify-center bg-gradient-to-b from-emerald-50 to-white px-4",

            div {
                class: "bg-white rounded-lg shadow-md p-8 max-w-md w-full",

                h2 { class: "text-2xl font-bold text-gray-900 mb-6 text-center", "Sign Up" }

                form {
                    class: "space-y-4",
                    onsubmit: handle_submit,

                    input {
                        r#type: "text",
                        placeholder: "Enter your first name",
                        class: "w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-emerald-500",
                        value: "{draft.read().firstname}",
                        oninput: move |e| draft.write().firstname = e.value()
                    }
                    input {
                        r#type: "text",
                        placeholder: "Enter your last name",
                        class: "w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-emerald-500",
                        value: "{draft.read().lastname}",
                        oninput: move |e| draft.write().lastname = e.value()
                    }
                    input {
                        r#type: "email",
                        placeholder: "Enter your email",
                        class: "w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-emerald-500",
                        value: "{draft.read().email}",
                        oninput: move |e| draft.write().email = e.value()
                    }

                    // Avatar picker; uploads as soon as a file is chosen
                    div {
                        input {
                            r#type: "file",
                            accept: ".jpg,.jpeg,.png",
                            class: "w-full px-4 py-3 border border-gray-300 rounded-lg text-gray-600",
                            onchange: handle_file
                        }
                        if uploading() {
                            p { class: "mt-1 text-xs text-gray-500", "Uploading avatar..." }
                        }
                        if let Some(pic) = draft.read().pic.clone() {
                            img {
                                class: "mt-2 w-16 h-16 rounded-full object-cover",
                                src: "{pic}",
                                alt: "avatar preview"
                            }
                        }
                    }

                    input {
                        r#type: "password",
                        placeholder: "Enter your password",
                        class: "w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-emerald-500",
                        value: "{draft.read().password}",
                        oninput: move |e| draft.write().password = e.value()
                    }
                    input {
                        r#type: "password",
                        placeholder: "Confirm your password",
                        class: "w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-emerald-500",
                        value: "{draft.read().confpassword}",
                        oninput: move |e| draft.write().confpassword = e.value()
                    }

                    button {
                        r#type: "submit",
                        class: "w-full py-3 bg-emerald-600 text-white rounded-lg hover:bg-emerald-700 transition-colors font-medium disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: uploading() || submitting(),
                        if submitting() {
                            "Registering..."
                        } else {
                            "Sign Up"
                        }
                    }
                }

                p {
                    class: "mt-4 text-sm text-center text-gray-600",
                    "Already a user? "
                    Link {
                        to: Route::Login {},
                        class: "text-emerald-700 hover:underline",
                        "Log in"
                    }
                }
            }
        }
    }
}

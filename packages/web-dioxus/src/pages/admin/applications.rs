//! Admin applications page - the moderation queue

use std::rc::Rc;

use dioxus::prelude::*;

use api_client::Application;
use flows::{ModerationAction, ModerationQueue, Verdict};

use crate::api::ServerFnApi;
use crate::auth::use_auth;
use crate::components::{use_confirm, use_toaster, Empty, LoadingSpinner, ModalConfirm, ToastSink};

const FALLBACK_AVATAR: &str =
    "https://icon-library.com/images/anonymous-avatar-icon/anonymous-avatar-icon-25.jpg";

/// Admin applications list page
#[component]
pub fn AdminApplications() -> Element {
    let auth = use_auth();
    let toaster = use_toaster();
    let confirmer = use_confirm();

    let queue = use_hook(|| ModerationQueue::new(Rc::new(ServerFnApi)));
    let mut applications = use_signal(Vec::<Application>::new);
    let mut loading = use_signal(|| true);
    let mut load_error = use_signal(|| None::<String>);

    // Initial fetch on mount
    let queue_for_load = queue.clone();
    use_future(move || {
        let queue = queue_for_load.clone();
        async move {
            match queue.refresh().await {
                Ok(()) => {
                    applications.set(queue.items());
                    load_error.set(None);
                }
                Err(_) => {
                    // previous snapshot (empty on first load) stays visible
                    load_error.set(Some("Unable to fetch applications".to_string()));
                }
            }
            loading.set(false);
        }
    });

    let handle_verdict = {
        let queue = queue.clone();
        move |(id, verdict): (String, Verdict)| {
            let queue = queue.clone();
            spawn(async move {
                let Some(token) = auth.token() else {
                    toaster.error("Session expired. Please log in again.");
                    return;
                };

                let action = ModerationAction::new(
                    Rc::new(ServerFnApi),
                    ModalConfirm(confirmer),
                    ToastSink(toaster),
                    queue.clone(),
                );

                if action.execute(&id, verdict, &token).await.is_ok() {
                    applications.set(queue.items());
                }
            });
        }
    };

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "All Applications" }

            if loading() {
                div { class: "text-center py-12", LoadingSpinner {} }
            } else {
                if let Some(err) = load_error() {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg mb-4",
                        "{err}"
                    }
                }

                if applications().is_empty() {
                    Empty {}
                } else {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 overflow-x-auto",
                        table {
                            class: "min-w-full divide-y divide-gray-200 text-sm",
                            thead {
                                class: "bg-gray-50 text-left text-xs font-medium text-gray-500 uppercase",
                                tr {
                                    th { class: "px-4 py-3", "S.No" }
                                    th { class: "px-4 py-3", "Pic" }
                                    th { class: "px-4 py-3", "First Name" }
                                    th { class: "px-4 py-3", "Last Name" }
                                    th { class: "px-4 py-3", "Email" }
                                    th { class: "px-4 py-3", "Mobile No." }
                                    th { class: "px-4 py-3", "Experience" }
                                    th { class: "px-4 py-3", "Specialization" }
                                    th { class: "px-4 py-3", "Fees" }
                                    th { class: "px-4 py-3", "Action" }
                                }
                            }
                            tbody {
                                class: "divide-y divide-gray-200",
                                for (i, app) in applications().into_iter().enumerate() {
                                    ApplicationRow {
                                        key: "{app.id}",
                                        index: i + 1,
                                        application: app,
                                        on_verdict: {
                                            let handler = handle_verdict.clone();
                                            move |args: (String, Verdict)| handler(args)
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ApplicationRowProps {
    index: usize,
    application: Application,
    on_verdict: EventHandler<(String, Verdict)>,
}

#[component]
fn ApplicationRow(props: ApplicationRowProps) -> Element {
    let app = &props.application;
    let on_verdict = props.on_verdict;

    let pic = app
        .applicant
        .pic
        .clone()
        .unwrap_or_else(|| FALLBACK_AVATAR.to_string());
    let mobile = app.applicant.mobile.clone().unwrap_or_else(|| "-".to_string());
    let experience = app
        .experience
        .map(|years| years.to_string())
        .unwrap_or_else(|| "-".to_string());
    let specialization = app
        .specialization
        .clone()
        .unwrap_or_else(|| "-".to_string());
    let fees = app
        .fees
        .map(|amount| amount.to_string())
        .unwrap_or_else(|| "-".to_string());

    let accept_id = app.applicant.id.clone();
    let reject_id = app.applicant.id.clone();

    rsx! {
        tr {
            class: "hover:bg-gray-50",
            td { class: "px-4 py-3 text-gray-500", "{props.index}" }
            td {
                class: "px-4 py-3",
                img {
                    class: "w-9 h-9 rounded-full object-cover",
                    src: "{pic}",
                    alt: "{app.applicant.firstname}"
                }
            }
            td { class: "px-4 py-3 text-gray-900", "{app.applicant.firstname}" }
            td { class: "px-4 py-3 text-gray-900", "{app.applicant.lastname}" }
            td { class: "px-4 py-3 text-gray-600", "{app.applicant.email}" }
            td { class: "px-4 py-3 text-gray-600", "{mobile}" }
            td { class: "px-4 py-3 text-gray-600", "{experience}" }
            td { class: "px-4 py-3 text-gray-600", "{specialization}" }
            td { class: "px-4 py-3 text-gray-600", "{fees}" }
            td {
                class: "px-4 py-3",
                div {
                    class: "flex items-center gap-2",
                    button {
                        class: "px-3 py-1.5 bg-emerald-100 text-emerald-700 text-sm rounded hover:bg-emerald-200",
                        onclick: move |_| on_verdict.call((accept_id.clone(), Verdict::Accept)),
                        "Accept"
                    }
                    button {
                        class: "px-3 py-1.5 bg-red-100 text-red-700 text-sm rounded hover:bg-red-200",
                        onclick: move |_| on_verdict.call((reject_id.clone(), Verdict::Reject)),
                        "Reject"
                    }
                }
            }
        }
    }
}

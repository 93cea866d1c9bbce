//! Awaitable confirmation dialog
//!
//! Replaces the browser's blocking confirm with a modal that resolves a
//! future, so action handlers can simply `await` the user's answer.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use dioxus::prelude::*;
use futures_channel::oneshot;

use flows::Confirm;

#[derive(Clone)]
pub struct ConfirmRequest {
    prompt: String,
    responder: Rc<RefCell<Option<oneshot::Sender<bool>>>>,
}

/// App-wide confirmation state
#[derive(Clone, Copy)]
pub struct Confirmer {
    request: Signal<Option<ConfirmRequest>>,
}

impl Confirmer {
    /// Ask the user a yes/no question. Resolves `false` if the dialog is
    /// replaced or torn down before an answer arrives.
    pub async fn ask(&self, prompt: &str) -> bool {
        let (tx, rx) = oneshot::channel();
        let mut request = self.request;
        request.set(Some(ConfirmRequest {
            prompt: prompt.to_string(),
            responder: Rc::new(RefCell::new(Some(tx))),
        }));
        rx.await.unwrap_or(false)
    }

    pub fn resolve(&self, answer: bool) {
        let mut request = self.request;
        let current: Option<ConfirmRequest> = request.peek().as_ref().cloned();
        request.set(None);
        if let Some(req) = current {
            if let Some(tx) = req.responder.borrow_mut().take() {
                let _ = tx.send(answer);
            }
        }
    }
}

/// Confirm provider component; renders children plus the dialog overlay
#[component]
pub fn ConfirmProvider(children: Element) -> Element {
    let confirmer = Confirmer {
        request: use_signal(|| None),
    };

    use_context_provider(|| confirmer);

    rsx! {
        {children}
        ConfirmDialog {}
    }
}

#[component]
fn ConfirmDialog() -> Element {
    let confirmer = use_confirm();
    let request = confirmer.request;

    match request() {
        Some(req) => rsx! {
            div {
                class: "fixed inset-0 z-50 flex items-center justify-center bg-black/40",
                div {
                    class: "bg-white rounded-lg shadow-md p-6 max-w-sm w-full mx-4",
                    p { class: "text-gray-900 mb-5", "{req.prompt}" }
                    div {
                        class: "flex justify-end gap-2",
                        button {
                            class: "px-4 py-2 text-sm rounded-md bg-stone-100 text-stone-700 hover:bg-stone-200",
                            onclick: move |_| confirmer.resolve(false),
                            "Cancel"
                        }
                        button {
                            class: "px-4 py-2 text-sm rounded-md bg-emerald-600 text-white hover:bg-emerald-700",
                            onclick: move |_| confirmer.resolve(true),
                            "Confirm"
                        }
                    }
                }
            }
        },
        None => rsx! {},
    }
}

/// Hook to access the confirmer
pub fn use_confirm() -> Confirmer {
    use_context::<Confirmer>()
}

/// Workflow confirmation seam backed by the modal
#[derive(Clone, Copy)]
pub struct ModalConfirm(pub Confirmer);

#[async_trait(?Send)]
impl Confirm for ModalConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        self.0.ask(prompt).await
    }
}

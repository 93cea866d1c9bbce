//! Toast notifications
//!
//! One pending toast at a time: the next success/error replaces it, so a
//! request surfaces as pending -> success or pending -> error.

use dioxus::prelude::*;

use flows::StatusSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Pending,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// App-wide toast state
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: Signal<Vec<Toast>>,
    pending_id: Signal<Option<u64>>,
    next_id: Signal<u64>,
}

impl Toaster {
    fn push(&self, kind: ToastKind, message: &str) -> u64 {
        let mut toasts = self.toasts;
        let mut next_id = self.next_id;

        let id = next_id();
        next_id.set(id + 1);
        toasts.write().push(Toast {
            id,
            kind,
            message: message.to_string(),
        });
        id
    }

    pub fn remove(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.write().retain(|t| t.id != id);
    }

    fn resolve_pending(&self) {
        let mut pending_id = self.pending_id;
        if let Some(id) = pending_id() {
            self.remove(id);
            pending_id.set(None);
        }
    }

    /// Show a pending toast; it stays until the next success/error.
    pub fn pending(&self, message: &str) {
        self.resolve_pending();
        let id = self.push(ToastKind::Pending, message);
        let mut pending_id = self.pending_id;
        pending_id.set(Some(id));
    }

    pub fn success(&self, message: &str) {
        self.resolve_pending();
        let id = self.push(ToastKind::Success, message);
        self.dismiss_later(id);
    }

    pub fn error(&self, message: &str) {
        self.resolve_pending();
        let id = self.push(ToastKind::Error, message);
        self.dismiss_later(id);
    }

    fn dismiss_later(&self, id: u64) {
        #[cfg(feature = "web")]
        {
            let toaster = *self;
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(4_000).await;
                toaster.remove(id);
            });
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = id;
        }
    }
}

/// Toast provider component; renders children plus the toast viewport
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toaster = Toaster {
        toasts: use_signal(Vec::new),
        pending_id: use_signal(|| None),
        next_id: use_signal(|| 0),
    };

    use_context_provider(|| toaster);

    rsx! {
        {children}
        ToastViewport {}
    }
}

#[component]
fn ToastViewport() -> Element {
    let toaster = use_toaster();
    let toasts = toaster.toasts;

    rsx! {
        div {
            class: "fixed top-4 right-4 z-50 flex flex-col gap-2 w-72",
            for toast in toasts() {
                div {
                    key: "{toast.id}",
                    class: match toast.kind {
                        ToastKind::Pending => "flex items-center justify-between bg-gray-800 text-white text-sm rounded-lg shadow-lg px-4 py-3",
                        ToastKind::Success => "flex items-center justify-between bg-emerald-600 text-white text-sm rounded-lg shadow-lg px-4 py-3",
                        ToastKind::Error => "flex items-center justify-between bg-red-600 text-white text-sm rounded-lg shadow-lg px-4 py-3",
                    },
                    span { "{toast.message}" }
                    button {
                        class: "ml-3 opacity-70 hover:opacity-100",
                        onclick: move |_| toaster.remove(toast.id),
                        "\u{2715}"
                    }
                }
            }
        }
    }
}

/// Hook to access the toaster
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}

/// Status sink adapter feeding workflow phases into the toaster
#[derive(Clone, Copy)]
pub struct ToastSink(pub Toaster);

impl StatusSink for ToastSink {
    fn pending(&self, message: &str) {
        self.0.pending(message);
    }

    fn success(&self, message: &str) {
        self.0.success(message);
    }

    fn error(&self, message: &str) {
        self.0.error(message);
    }
}

//! Toast notifications.
//!
//! One global queue: the API client's error policy, the session provider
//! and the views all push into it, and a single [`Toaster`] mounted at the
//! app root renders it. Toasts auto-dismiss after a few seconds on the
//! web; a close button is always there.

use api::NoticeLevel;
use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl From<NoticeLevel> for ToastLevel {
    fn from(level: NoticeLevel) -> Self {
        match level {
            NoticeLevel::Info => ToastLevel::Info,
            NoticeLevel::Success => ToastLevel::Success,
            NoticeLevel::Warning => ToastLevel::Warning,
            NoticeLevel::Error => ToastLevel::Error,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

static TOASTS: GlobalSignal<Vec<Toast>> = Signal::global(Vec::new);
static NEXT_ID: GlobalSignal<u64> = Signal::global(|| 0);

/// Push a toast onto the global queue. Safe to call from outside
/// components (the client hooks use it).
pub fn push_toast(level: ToastLevel, message: impl Into<String>) {
    let id = {
        let mut next = NEXT_ID.write();
        *next += 1;
        *next
    };
    TOASTS.write().push(Toast {
        id,
        level,
        message: message.into(),
    });
    // Keep the queue bounded if nothing dismisses (native tests).
    let len = TOASTS.read().len();
    if len > 5 {
        TOASTS.write().remove(0);
    }
}

fn dismiss(id: u64) {
    TOASTS.write().retain(|toast| toast.id != id);
}

/// Handle for pushing toasts from views.
#[derive(Clone, Copy, Default)]
pub struct Toasts;

impl Toasts {
    pub fn success(&self, message: impl Into<String>) {
        push_toast(ToastLevel::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        push_toast(ToastLevel::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        push_toast(ToastLevel::Info, message);
    }
}

pub fn use_toast() -> Toasts {
    Toasts
}

fn level_class(level: ToastLevel) -> &'static str {
    match level {
        ToastLevel::Info => "toast--info",
        ToastLevel::Success => "toast--success",
        ToastLevel::Warning => "toast--warning",
        ToastLevel::Error => "toast--error",
    }
}

/// Renders the toast queue. Mount once, near the app root.
#[component]
pub fn Toaster() -> Element {
    // Auto-dismiss: whenever the queue grows, schedule a sweep for the
    // newest toast.
    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        if let Some(newest) = TOASTS.read().last().map(|toast| toast.id) {
            spawn(async move {
                gloo_timers::future::sleep(std::time::Duration::from_secs(5)).await;
                dismiss(newest);
            });
        }
    });

    rsx! {
        div {
            class: "toaster",
            for toast in TOASTS.read().iter() {
                div {
                    key: "{toast.id}",
                    class: "toast {level_class(toast.level)}",
                    span { class: "toast__message", "{toast.message}" }
                    button {
                        class: "toast__close",
                        onclick: {
                            let id = toast.id;
                            move |_| dismiss(id)
                        },
                        "×"
                    }
                }
            }
        }
    }
}

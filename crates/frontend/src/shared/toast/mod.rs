//! Toast notifications
//!
//! One toast host per app, provided through context:
//! ```ignore
//! let toast = use_toast();
//! toast.success("Status updated");
//! ```

pub mod state;

pub use state::{ToastSeverity, ToastState};

use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Auto-dismiss delay
pub const TOAST_TIMEOUT_MS: u32 = 4000;

/// Service for showing toasts from any component
#[derive(Clone, Copy)]
pub struct ToastService {
    state: RwSignal<ToastState>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ToastState::new()),
        }
    }

    /// Shows `message`, replacing any visible toast, and schedules its dismissal
    pub fn show(&self, message: impl Into<String>, severity: ToastSeverity) {
        let message = message.into();
        log::info!("toast ({:?}): {}", severity, message);

        let mut generation = 0;
        self.state.update(|s| generation = s.show(message, severity));

        let state = self.state;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            state.update(|s| {
                s.expire(generation);
            });
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, ToastSeverity::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, ToastSeverity::Error);
    }

    pub fn dismiss(&self) {
        self.state.update(|s| s.dismiss());
    }

    pub fn state(&self) -> Signal<ToastState> {
        self.state.into()
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Renders the current toast, if visible
#[component]
pub fn ToastHost() -> impl IntoView {
    let toast = use_toast();
    let state = toast.state();

    view! {
        {move || {
            let current = state.get();
            if !current.visible {
                return ().into_any();
            }
            let class = format!("toast {}", current.severity.css_modifier());
            view! {
                <div class=class role="status" aria-live="polite">
                    <span class="toast__icon">{icon(current.severity.icon_name())}</span>
                    <span class="toast__message">{current.message}</span>
                    <button
                        class="toast__close"
                        aria-label="Close"
                        on:click=move |_| toast.dismiss()
                    >
                        {icon("x")}
                    </button>
                </div>
            }
            .into_any()
        }}
    }
}

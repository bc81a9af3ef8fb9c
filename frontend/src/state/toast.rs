use leptos::*;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    pub fn as_class(&self) -> &'static str {
        match self {
            ToastLevel::Success => {
                "bg-status-success-bg border-status-success-border text-status-success-text"
            }
            ToastLevel::Error => {
                "bg-status-error-bg border-status-error-border text-status-error-text"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub level: ToastLevel,
    pub message: String,
}

/// Sink for short-lived user-facing messages.
pub trait Notifier {
    fn notify(&self, level: ToastLevel, message: &str);

    fn success(&self, message: &str) {
        self.notify(ToastLevel::Success, message);
    }

    fn error(&self, message: &str) {
        self.notify(ToastLevel::Error, message);
    }
}

#[derive(Clone, Copy)]
pub struct ToastState {
    pub toasts: RwSignal<Vec<Toast>>,
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    timeout_ms: u32,
}

impl ToastState {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            timeout_ms,
        }
    }

    pub fn push(&self, level: ToastLevel, message: impl Into<String>) -> Uuid {
        let toast = Toast {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
        };
        let id = toast.id;
        self.toasts.update(|list| list.push(toast));
        self.schedule_dismiss(id);
        id
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|list| list.retain(|toast| toast.id != id));
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: Uuid) {
        if self.timeout_ms == 0 {
            return;
        }
        let state = *self;
        gloo_timers::callback::Timeout::new(self.timeout_ms, move || state.dismiss(id)).forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: Uuid) {}
}

impl Notifier for ToastState {
    fn notify(&self, level: ToastLevel, message: &str) {
        self.push(level, message);
    }
}

pub fn provide_toasts(timeout_ms: u32) -> ToastState {
    let state = ToastState::new(timeout_ms);
    provide_context(state);
    state
}

pub fn use_toasts() -> ToastState {
    use_context::<ToastState>()
        .unwrap_or_else(|| provide_toasts(crate::config::current().toast_timeout_ms()))
}

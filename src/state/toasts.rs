//! Transient notification queue rendered by the toaster overlay.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use leptos::prelude::*;
use uuid::Uuid;

/// How long a toast stays on screen before auto-dismissal.
#[cfg(target_arch = "wasm32")]
const TOAST_LIFETIME_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

/// Pure queue behind the reactive handle. Newest toasts render last.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    toasts: Vec<Toast>,
}

impl ToastState {
    pub fn push(&mut self, kind: ToastKind, message: String) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.push(Toast { id, kind, message });
        id
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Copyable handle over the shared toast queue.
#[derive(Clone, Copy)]
pub struct Toasts {
    state: RwSignal<ToastState>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ToastState::default()),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let mut id = Uuid::nil();
        self.state.update(|state| id = state.push(kind, message));
        self.schedule_dismiss(id);
    }

    pub fn dismiss(&self, id: Uuid) {
        self.state.update(|state| state.dismiss(id));
    }

    /// Reactive snapshot of the queue for rendering.
    pub fn list(&self) -> Vec<Toast> {
        self.state.with(|state| state.toasts().to_vec())
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: Uuid) {
        let handle = *self;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            handle.dismiss(id);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: Uuid) {}
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_toasts() -> Toasts {
    let toasts = Toasts::new();
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

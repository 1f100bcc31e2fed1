//! Transient toast notifications.
//!
//! Pages push toasts through [`notify`]; the `Toaster` component renders the
//! stack. Toasts auto-dismiss after a few seconds and are never persisted —
//! failures that need to outlive a toast are modeled in the owning state
//! machine instead.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// Auto-dismiss delay.
pub const TOAST_TTL_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// One visible notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// The visible toast stack, newest last.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            level,
            message: message.into(),
        });
        id
    }

    /// Dismissing an already-dismissed id is a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Push a toast and schedule its dismissal after [`TOAST_TTL_MS`].
pub fn notify(toasts: RwSignal<ToastState>, level: ToastLevel, message: impl Into<String>) {
    let id = toasts
        .try_update(|t| t.push(level, message))
        .unwrap_or_default();

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
        toasts.try_update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "csr"))]
    let _ = id;
}

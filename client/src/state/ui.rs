//! Local UI chrome state (theme, transient notices).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state so pages can
//! report outcomes without owning any notification markup.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

/// Visual flavour of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

/// A short-lived notice shown in the corner of the screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic id so an auto-dismiss timer only clears its own toast.
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

/// UI state for theme and notices.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
    pub toast: Option<Toast>,
    toast_seq: u64,
}

impl UiState {
    /// Replace the current toast and return the new toast id.
    pub fn notify(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.toast_seq += 1;
        self.toast = Some(Toast { id: self.toast_seq, message: message.into(), kind });
        self.toast_seq
    }

    /// Dismiss the toast only if it is still the one identified by `id`.
    pub fn dismiss(&mut self, id: u64) {
        if self.toast.as_ref().is_some_and(|t| t.id == id) {
            self.toast = None;
        }
    }
}

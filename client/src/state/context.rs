//! Bundle of the app-wide signals most components need together.
//!
//! `App` provides each signal as its own context; `AppContext::expect`
//! collects them so a handler can report an outcome in one call.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::state::auth::AuthState;
use crate::state::cache::QueryCache;
use crate::state::ui::{ToastKind, UiState};
use crate::util::auth::handle_unauthorized;

#[derive(Clone, Copy)]
pub struct AppContext {
    pub auth: RwSignal<AuthState>,
    pub cache: RwSignal<QueryCache>,
    pub ui: RwSignal<UiState>,
}

impl AppContext {
    /// # Panics
    ///
    /// Panics when called outside the `App` component tree.
    #[must_use]
    pub fn expect() -> Self {
        Self {
            auth: expect_context::<RwSignal<AuthState>>(),
            cache: expect_context::<RwSignal<QueryCache>>(),
            ui: expect_context::<RwSignal<UiState>>(),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.ui.update(|ui| {
            ui.notify(ToastKind::Success, message);
        });
    }

    /// Surface a failed call. A 401 ends the session instead of toasting.
    pub fn report(&self, err: &ApiError) {
        if handle_unauthorized(err, self.auth, self.cache) {
            return;
        }
        self.ui.update(|ui| {
            ui.notify(ToastKind::Error, err.to_string());
        });
    }

    /// Drop every cached response under `prefix` after a mutation.
    pub fn invalidate(&self, prefix: &str) {
        self.cache.update(|cache| {
            cache.invalidate_prefix(prefix);
        });
    }
}

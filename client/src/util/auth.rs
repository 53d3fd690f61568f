//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior: protected
//! pages bounce anonymous users to `/login`, and the login/register pages
//! bounce signed-in users to the feed.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::error::ApiError;
use crate::state::auth::AuthState;
use crate::state::cache::QueryCache;

/// True once bootstrap has settled and there is no usable session.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && (state.user.is_none() || state.token.is_none())
}

#[must_use]
pub fn should_redirect_authed(state: &AuthState) -> bool {
    !state.loading && state.is_authenticated()
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Redirect to `/` when a signed-in user lands on an auth screen.
pub fn install_authed_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_authed(&auth.get()) {
            navigate("/", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Drop the session everywhere: cookie, cached responses and auth state.
/// The unauth redirect installed by the current page does the navigation.
pub fn end_session(auth: RwSignal<AuthState>, cache: RwSignal<QueryCache>) {
    crate::util::session::clear_token();
    cache.update(QueryCache::clear);
    auth.update(AuthState::sign_out);
}

/// Call after any failed request: a rejected token ends the session.
/// Returns `true` when the error was handled that way.
pub fn handle_unauthorized(err: &ApiError, auth: RwSignal<AuthState>, cache: RwSignal<QueryCache>) -> bool {
    if err.is_unauthorized() {
        end_session(auth, cache);
        return true;
    }
    false
}

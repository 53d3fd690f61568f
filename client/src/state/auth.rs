//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. The token itself lives in a cookie
//! (`util::session`); this struct mirrors it so guards can react to changes.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{SessionResponse, User};

/// Authentication state tracking the current user, token and loading status.
///
/// Provided as an `RwSignal<AuthState>` context by `App`.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    /// True while the bootstrap `GET /api/users/me` is in flight.
    pub loading: bool,
}

impl AuthState {
    /// State before the cookie has been read. SSR renders with this too, so
    /// server and hydrated markup agree.
    #[must_use]
    pub fn pending() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// State once the cookie has been read at startup.
    #[must_use]
    pub fn bootstrapping(token: Option<String>) -> Self {
        let loading = token.is_some();
        Self { user: None, token, loading }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    pub fn sign_in(&mut self, session: SessionResponse) {
        self.token = Some(session.token);
        self.user = Some(session.user);
        self.loading = false;
    }

    /// Finish bootstrap with the user behind the stored token.
    pub fn restore(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
    }

    pub fn sign_out(&mut self) {
        self.token = None;
        self.user = None;
        self.loading = false;
    }
}

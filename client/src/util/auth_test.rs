use super::*;
use crate::net::types::User;

fn user() -> User {
    User {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@clinic.test".to_owned(),
        crmv: None,
        phone: None,
    }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, token: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { user: None, token: Some("t".to_owned()), loading: true };
    assert!(!should_redirect_unauth(&state));
    assert!(!should_redirect_authed(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState { user: Some(user()), token: Some("t".to_owned()), loading: false };
    assert!(!should_redirect_unauth(&state));
    assert!(should_redirect_authed(&state));
}

#[test]
fn should_redirect_when_token_was_dropped() {
    let state = AuthState { user: Some(user()), token: None, loading: false };
    assert!(should_redirect_unauth(&state));
    assert!(!should_redirect_authed(&state));
}

#[test]
fn handle_unauthorized_ends_session_only_for_401() {
    let owner = Owner::new();
    owner.set();

    let auth = RwSignal::new(AuthState { user: Some(user()), token: Some("t".to_owned()), loading: false });
    let cache = RwSignal::new(QueryCache::default());
    cache.update(|c| c.insert("/api/users/me", serde_json::json!({}), 0.0));

    assert!(!handle_unauthorized(&ApiError::NotFound, auth, cache));
    assert!(auth.get_untracked().is_authenticated());

    assert!(handle_unauthorized(&ApiError::Unauthorized, auth, cache));
    assert!(!auth.get_untracked().is_authenticated());
    assert!(cache.get_untracked().is_empty());
}

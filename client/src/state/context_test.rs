use super::*;
use crate::net::types::User;

fn signed_in() -> AppContext {
    let user = User {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@clinic.test".to_owned(),
        crmv: None,
        phone: None,
    };
    AppContext {
        auth: RwSignal::new(AuthState { user: Some(user), token: Some("t".to_owned()), loading: false }),
        cache: RwSignal::new(QueryCache::default()),
        ui: RwSignal::new(UiState::default()),
    }
}

#[test]
fn report_toasts_ordinary_errors() {
    let owner = Owner::new();
    owner.set();
    let ctx = signed_in();

    ctx.report(&ApiError::NotFound);

    let toast = ctx.ui.get_untracked().toast.unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, "record not found");
    assert!(ctx.auth.get_untracked().is_authenticated());
}

#[test]
fn report_ends_session_on_unauthorized_without_toast() {
    let owner = Owner::new();
    owner.set();
    let ctx = signed_in();

    ctx.report(&ApiError::Unauthorized);

    assert!(ctx.ui.get_untracked().toast.is_none());
    assert!(!ctx.auth.get_untracked().is_authenticated());
}

#[test]
fn invalidate_drops_nested_keys() {
    let owner = Owner::new();
    owner.set();
    let ctx = signed_in();
    ctx.cache.update(|c| {
        c.insert("/api/patients?page=1", serde_json::json!([]), 0.0);
        c.insert("/api/patients/p1", serde_json::json!({}), 0.0);
        c.insert("/api/users/me", serde_json::json!({}), 0.0);
    });

    ctx.invalidate("/api/patients");

    assert_eq!(ctx.cache.get_untracked().len(), 1);
}

#[test]
fn success_sets_success_toast() {
    let owner = Owner::new();
    owner.set();
    let ctx = signed_in();
    ctx.success("Saved");
    assert_eq!(ctx.ui.get_untracked().toast.unwrap().kind, ToastKind::Success);
}

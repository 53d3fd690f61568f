use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_theme_is_light() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn ui_state_default_has_no_toast() {
    let state = UiState::default();
    assert!(state.toast.is_none());
}

// =============================================================
// Toasts
// =============================================================

#[test]
fn notify_assigns_increasing_ids() {
    let mut state = UiState::default();
    let first = state.notify(ToastKind::Success, "Saved");
    let second = state.notify(ToastKind::Error, "Failed");
    assert!(second > first);
    assert_eq!(
        state.toast,
        Some(Toast { id: second, message: "Failed".to_owned(), kind: ToastKind::Error })
    );
}

#[test]
fn dismiss_ignores_superseded_toast() {
    let mut state = UiState::default();
    let old = state.notify(ToastKind::Success, "Saved");
    let new = state.notify(ToastKind::Success, "Deleted");
    state.dismiss(old);
    assert_eq!(state.toast.as_ref().map(|t| t.id), Some(new));
    state.dismiss(new);
    assert!(state.toast.is_none());
}

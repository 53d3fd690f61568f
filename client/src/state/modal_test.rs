use super::*;

#[test]
fn default_is_closed() {
    let modal: ModalState<String> = ModalState::default();
    assert!(!modal.is_open());
    assert!(modal.editing().is_none());
}

#[test]
fn create_is_open_without_record() {
    let modal: ModalState<String> = ModalState::Create;
    assert!(modal.is_open());
    assert!(modal.editing().is_none());
    assert_eq!(modal.title("vaccine"), "New vaccine");
}

#[test]
fn edit_carries_record() {
    let modal = ModalState::Edit("e1".to_owned());
    assert!(modal.is_open());
    assert_eq!(modal.editing().map(String::as_str), Some("e1"));
    assert_eq!(modal.title("exam"), "Edit exam");
}

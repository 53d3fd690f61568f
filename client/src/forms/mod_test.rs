use super::*;
use time::macros::date;

#[test]
fn first_message_per_field_wins() {
    let mut errors = FormErrors::default();
    errors.add("name", "first");
    errors.add("name", "second");
    assert_eq!(errors.get("name"), Some("first"));
    assert_eq!(errors.len(), 1);
}

#[test]
fn finish_builds_only_without_errors() {
    assert_eq!(FormErrors::default().finish(|| 7), Ok(7));

    let mut errors = FormErrors::default();
    errors.add("email", REQUIRED);
    let err = errors.finish(|| 7).unwrap_err();
    assert!(err.has("email"));
}

#[test]
fn required_trims_and_flags_blank() {
    let mut errors = FormErrors::default();
    assert_eq!(required(&mut errors, "name", "  Rex "), "Rex");
    assert!(errors.is_empty());
    assert_eq!(required(&mut errors, "breed", "   "), "");
    assert_eq!(errors.get("breed"), Some(REQUIRED));
}

#[test]
fn optional_maps_blank_to_none() {
    assert_eq!(optional("  "), None);
    assert_eq!(optional(" note "), Some("note".to_owned()));
}

#[test]
fn required_date_distinguishes_missing_and_invalid() {
    let mut errors = FormErrors::default();
    assert_eq!(required_date(&mut errors, "a", ""), None);
    assert_eq!(required_date(&mut errors, "b", "31/12/2024"), None);
    assert_eq!(errors.get("a"), Some(REQUIRED));
    assert_eq!(errors.get("b"), Some(INVALID_DATE));
}

#[test]
fn past_date_rejects_future() {
    let mut errors = FormErrors::default();
    let today = date!(2024 - 05 - 01);
    assert_eq!(past_date(&mut errors, "d", "2024-05-01", today), Some(today));
    assert!(errors.is_empty());
    past_date(&mut errors, "d", "2024-05-02", today);
    assert_eq!(errors.get("d"), Some(FUTURE_DATE));
}

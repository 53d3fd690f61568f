use super::*;

#[test]
fn rejected_credentials_read_as_bad_login() {
    assert_eq!(login_error_message(&ApiError::Unauthorized), BAD_CREDENTIALS);
    assert_eq!(login_error_message(&ApiError::NotFound), BAD_CREDENTIALS);
}

#[test]
fn other_failures_keep_their_message() {
    assert_eq!(login_error_message(&ApiError::Network("offline".to_owned())), "network error: offline");
    assert_eq!(login_error_message(&ApiError::Validation("email taken".to_owned())), "email taken");
}

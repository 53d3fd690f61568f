use super::*;

#[test]
fn from_status_maps_auth_and_not_found() {
    assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
    assert_eq!(ApiError::from_status(404, "{}"), ApiError::NotFound);
    assert!(ApiError::from_status(401, "").is_unauthorized());
}

#[test]
fn from_status_uses_server_message_for_validation() {
    let err = ApiError::from_status(422, r#"{"message":"email already registered"}"#);
    assert_eq!(err, ApiError::Validation("email already registered".to_owned()));
    assert_eq!(err.to_string(), "email already registered");
}

#[test]
fn from_status_defaults_validation_message() {
    assert_eq!(ApiError::from_status(400, ""), ApiError::Validation("invalid data".to_owned()));
}

#[test]
fn from_status_falls_back_to_generic_status() {
    let err = ApiError::from_status(503, "upstream down");
    assert_eq!(err, ApiError::Status { status: 503, message: "upstream down".to_owned() });
    assert_eq!(err.to_string(), "request failed (503): upstream down");
}

#[test]
fn server_message_reads_error_key() {
    assert_eq!(server_message(r#"{"error":"bad token"}"#), Some("bad token".to_owned()));
}

#[test]
fn server_message_keeps_json_without_known_keys_as_raw_text() {
    assert_eq!(server_message(r#" {"detail":"x"} "#), Some(r#"{"detail":"x"}"#.to_owned()));
    assert_eq!(server_message("   "), None);
}

#[test]
fn validation_keeps_unkeyed_server_text() {
    let err = ApiError::from_status(422, r#"{"detail":"email already taken"}"#);
    assert_eq!(err, ApiError::Validation(r#"{"detail":"email already taken"}"#.to_owned()));
}

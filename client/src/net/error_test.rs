use super::*;

#[test]
fn from_status_reads_message_field() {
    let err = ApiError::from_status(409, r#"{"message":"exists"}"#);
    assert_eq!(err, ApiError::Status { status: 409, message: Some("exists".to_owned()) });
    assert_eq!(err.display_message("failed to create user"), "exists");
}

#[test]
fn from_status_without_json_body_uses_fallback() {
    let err = ApiError::from_status(500, "<html>oops</html>");
    assert_eq!(err, ApiError::Status { status: 500, message: None });
    assert_eq!(err.display_message("Failed to update blog"), "Failed to update blog");
}

#[test]
fn from_status_ignores_blank_message() {
    let err = ApiError::from_status(400, r#"{"message":"  "}"#);
    assert_eq!(err.display_message("failed to login"), "failed to login");
}

#[test]
fn not_authenticated_has_fixed_text() {
    assert_eq!(ApiError::NotAuthenticated.display_message("unused"), "User is not authenticated");
}

#[test]
fn transport_detail_is_surfaced() {
    let err = ApiError::Transport("Failed to fetch".to_owned());
    assert_eq!(err.display_message("unused"), "Failed to fetch");
    assert_eq!(err.to_string(), "network request failed: Failed to fetch");
}

#[test]
fn empty_detail_falls_back_to_generic_message() {
    assert_eq!(ApiError::Transport(String::new()).display_message("x"), GENERIC_ERROR);
    assert_eq!(ApiError::Decode(" ".to_owned()).display_message("x"), GENERIC_ERROR);
}

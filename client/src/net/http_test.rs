use super::*;

#[test]
fn request_builder_sets_authorization_and_body() {
    let req = ApiRequest::new(Method::Patch, "http://api/blogs/updateBlog/1")
        .with_authorization("t1")
        .with_json(&serde_json::json!({ "title": "x" }))
        .unwrap();
    assert_eq!(req.method, Method::Patch);
    assert_eq!(req.authorization.as_deref(), Some("t1"));
    assert_eq!(req.body, Some(serde_json::json!({ "title": "x" })));
}

#[test]
fn success_range_is_2xx_only() {
    for status in [200, 201, 204, 299] {
        assert!(ApiResponse { status, body: String::new() }.is_success(), "{status}");
    }
    for status in [199, 301, 404, 409, 500] {
        assert!(!ApiResponse { status, body: String::new() }.is_success(), "{status}");
    }
}

#[test]
fn error_for_status_passes_success_through() {
    let resp = ApiResponse { status: 200, body: "{}".to_owned() };
    assert_eq!(resp.clone().error_for_status(), Ok(resp));
}

#[test]
fn error_for_status_carries_message() {
    let resp = ApiResponse { status: 403, body: r#"{"message":"not yours"}"#.to_owned() };
    assert_eq!(
        resp.error_for_status(),
        Err(ApiError::Status { status: 403, message: Some("not yours".to_owned()) })
    );
}

#[test]
fn json_reports_decode_errors() {
    let resp = ApiResponse { status: 200, body: "not json".to_owned() };
    let err = resp.json::<serde_json::Value>().unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

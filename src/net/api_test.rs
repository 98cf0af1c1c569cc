use super::*;

#[test]
fn error_message_prefers_body_message_field() {
    let body = r#"{"timestamp":"2025-03-01T10:00:00Z","status":409,"error":"Conflict","message":"Category name already in use","path":"/api/categories"}"#;
    assert_eq!(error_message(409, body), "Category name already in use");
}

#[test]
fn error_message_falls_back_for_non_json_bodies() {
    assert_eq!(error_message(502, "Bad Gateway"), "HTTP 502");
    assert_eq!(error_message(500, ""), "HTTP 500");
}

#[test]
fn error_message_ignores_empty_or_non_string_message() {
    assert_eq!(error_message(400, r#"{"message":""}"#), "HTTP 400");
    assert_eq!(error_message(400, r#"{"message":42}"#), "HTTP 400");
    assert_eq!(error_message(404, r#"{"error":"Not Found"}"#), "HTTP 404");
}

#[test]
fn api_error_displays_its_message() {
    let err = ApiError {
        status: 404,
        message: "HTTP 404".to_owned(),
    };
    assert_eq!(err.to_string(), "HTTP 404");
}

#[test]
fn network_errors_carry_status_zero() {
    let err = ApiError::network("connection refused");
    assert_eq!(err.status, 0);
    assert_eq!(err.to_string(), "connection refused");
}

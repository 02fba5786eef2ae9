use super::*;

#[test]
fn receipt_parses_server_response() {
    let raw = r#"{"success":true,"message":"Thanks!","request_id":"req_0123456789ab"}"#;
    let receipt: ContactReceipt = serde_json::from_str(raw).unwrap();
    assert!(receipt.success);
    assert_eq!(receipt.request_id.as_deref(), Some("req_0123456789ab"));
}

#[test]
fn receipt_tolerates_missing_request_id() {
    let receipt: ContactReceipt = serde_json::from_str(r#"{"success":true,"message":"ok"}"#).unwrap();
    assert_eq!(receipt.request_id, None);
}

#[test]
fn error_body_parses_validation_envelope() {
    let raw = r#"{"success":false,"message":"Validation error. Please check your input.","error_code":"VALIDATION_ERROR","details":{"errors":[{"field":"email","message":"invalid"}]}}"#;
    let body: ApiErrorBody = serde_json::from_str(raw).unwrap();
    assert_eq!(body.error_code.as_deref(), Some("VALIDATION_ERROR"));
    assert_eq!(body.details.unwrap()["errors"][0]["field"], "email");
}

#[test]
fn error_body_parses_minimal_envelope() {
    let body: ApiErrorBody = serde_json::from_str(r#"{"message":"Too many requests"}"#).unwrap();
    assert!(!body.success);
    assert_eq!(body.error_code, None);
}

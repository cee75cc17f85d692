use crate::{ClientError, ErrorDetail};

use serde_json::json;

#[test]
fn test_status_detail_parses_json_body() {
    let err = ClientError::status(
        "request_login",
        "http://localhost/t/identity",
        403,
        String::from(r#"{"code":403,"reason":"denied"}"#),
    );

    let detail = err.to_detail().unwrap();

    assert_eq!(detail["kind"], "status");
    assert_eq!(detail["status"], 403);
    assert_eq!(detail["body"], json!({"code": 403, "reason": "denied"}));
}

#[test]
fn test_status_detail_keeps_text_body() {
    let err = ClientError::status(
        "request_login",
        "http://localhost/t/identity",
        502,
        String::from("Bad Gateway"),
    );

    let detail = err.to_detail().unwrap();

    assert_eq!(detail["body"], "Bad Gateway");
}

#[test]
fn test_remote_exception_detail_has_exception_fields() {
    let err = ClientError::remote_exception(
        "request_login",
        "http://localhost/t/identity",
        "LoginError",
        "Acquire.Identity",
        "unknown user",
    );

    let detail = err.to_detail().unwrap();

    assert_eq!(
        detail,
        json!({
            "kind": "remote_exception",
            "function": "request_login",
            "service": "http://localhost/t/identity",
            "class": "LoginError",
            "module": "Acquire.Identity",
            "error": "unknown user",
        })
    );
}

#[test]
fn test_detail_omits_location() {
    let err = ClientError::unpacking("no payload");

    let detail = err.to_detail().unwrap();

    assert_eq!(detail, json!({"kind": "unpacking", "message": "no payload"}));
}

#[test]
fn test_json_error_converts_with_from() {
    let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let err: ClientError = json_err.into();

    match err {
        ClientError::Json { .. } => {}
        other => panic!("Expected Json variant, got {other:?}"),
    }
}

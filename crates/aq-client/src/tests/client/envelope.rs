use crate::{ClientError, FunctionCall, unpack_return_value};

use serde_json::json;

const FUNCTION: &str = "request_login";
const SERVICE: &str = "http://localhost:8080/t/identity";

#[test]
fn test_function_call_serializes_function_payload_and_synctime() {
    let args = json!({"username": "chryswoods"});
    let call = FunctionCall::new(FUNCTION, &args);

    let value = serde_json::to_value(&call).unwrap();

    assert_eq!(value["function"], FUNCTION);
    assert_eq!(value["payload"]["username"], "chryswoods");
    let synctime = value["synctime"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(synctime).is_ok());
}

#[test]
fn test_unpack_status_ok_returns_return_value() {
    let data = json!({"payload": {"status": 0, "return": {"login_url": "x/s?id=1"}}});

    let value = unpack_return_value(data, FUNCTION, SERVICE).unwrap();

    assert_eq!(value, Some(json!({"login_url": "x/s?id=1"})));
}

#[test]
fn test_unpack_status_ok_without_return_is_none() {
    let data = json!({"payload": {"status": 0}});

    let value = unpack_return_value(data, FUNCTION, SERVICE).unwrap();

    assert!(value.is_none());
}

#[test]
fn test_unpack_payload_without_status_returns_return_value() {
    let data = json!({"payload": {"return": {"result": 42}}});

    let value = unpack_return_value(data, FUNCTION, SERVICE).unwrap();

    assert_eq!(value, Some(json!({"result": 42})));
}

#[test]
fn test_unpack_exception_is_remote_exception() {
    let data = json!({
        "payload": {
            "status": -1,
            "exception": {
                "class": "PermissionError",
                "module": "builtins",
                "error": "denied"
            }
        }
    });

    let err = unpack_return_value(data, FUNCTION, SERVICE).unwrap_err();

    match err {
        ClientError::RemoteException {
            ref class,
            ref module,
            ref error,
            ref function,
            ..
        } => {
            assert_eq!(class, "PermissionError");
            assert_eq!(module, "builtins");
            assert_eq!(error, "denied");
            assert_eq!(function, FUNCTION);
        }
        other => panic!("Expected RemoteException, got {other:?}"),
    }
}

#[test]
fn test_unpack_bare_error_is_remote() {
    let data = json!({"payload": {"error": "service is down"}});

    let err = unpack_return_value(data, FUNCTION, SERVICE).unwrap_err();

    assert_eq!(err.kind(), "remote");
    assert!(err.to_string().contains("service is down"));
}

#[test]
fn test_unpack_nonzero_status_without_exception_is_remote() {
    let data = json!({"payload": {"status": -3, "error": "packing failed"}});

    let err = unpack_return_value(data, FUNCTION, SERVICE).unwrap_err();

    assert_eq!(err.kind(), "remote");
    assert!(err.to_string().contains("exited with status -3"));
}

#[test]
fn test_unpack_missing_payload_is_unpacking_error() {
    let data = json!({"function": FUNCTION});

    let err = unpack_return_value(data, FUNCTION, SERVICE).unwrap_err();

    assert_eq!(err.kind(), "unpacking");
}

#[test]
fn test_unpack_encrypted_response_is_unpacking_error() {
    let data = json!({"encrypted": true, "data": "...", "fingerprint": "ab:cd"});

    let err = unpack_return_value(data, FUNCTION, SERVICE).unwrap_err();

    assert_eq!(err.kind(), "unpacking");
    assert!(err.to_string().contains("encrypted"));
}

#[test]
fn test_unpack_non_object_response_is_unpacking_error() {
    let err = unpack_return_value(json!([1, 2, 3]), FUNCTION, SERVICE).unwrap_err();

    assert_eq!(err.kind(), "unpacking");
}

#[test]
fn test_unpack_non_integer_status_is_unpacking_error() {
    let data = json!({"payload": {"status": "bad"}});

    let err = unpack_return_value(data, FUNCTION, SERVICE).unwrap_err();

    assert_eq!(err.kind(), "unpacking");
}

//! JSON envelopes exchanged with an Acquire service.
//!
//! A call is sent as `{ "function", "payload", "synctime" }`. The service
//! answers with `{ "payload": { "status": 0, "return": {...} } }`, or with a
//! non-zero status and an `exception` record describing what went wrong.

use crate::client::{ClientError, ClientResult};

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

const STATUS_OK: i64 = 0;

/// Arguments for one remote function call
#[derive(Debug, Serialize)]
pub struct FunctionCall<'a> {
    pub function: &'a str,
    pub payload: &'a Value,
    pub synctime: String,
}

impl<'a> FunctionCall<'a> {
    pub fn new(function: &'a str, payload: &'a Value) -> Self {
        Self {
            function,
            payload,
            synctime: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

/// Extract the return value of `function` on `service` from a response envelope.
///
/// Returns `Ok(None)` when the call succeeded but produced no return value.
pub fn unpack_return_value(data: Value, function: &str, service: &str) -> ClientResult<Option<Value>> {
    let mut data = match data {
        Value::Object(data) => data,
        other => {
            return Err(ClientError::unpacking(format!(
                "Response from '{function}' on '{service}' is not a JSON object: {other}"
            )));
        }
    };

    if data.get("encrypted").and_then(Value::as_bool).unwrap_or(false) {
        return Err(ClientError::unpacking(format!(
            "Response from '{function}' on '{service}' is encrypted, which this client cannot read"
        )));
    }

    let payload = match data.remove("payload") {
        Some(Value::Null) | None => {
            return Err(ClientError::unpacking(format!(
                "We should have been able to extract the payload from {}",
                Value::Object(data)
            )));
        }
        Some(Value::Object(payload)) => payload,
        Some(other) => {
            return Err(ClientError::unpacking(format!(
                "Payload from '{function}' on '{service}' is not a JSON object: {other}"
            )));
        }
    };

    if payload.len() == 1
        && let Some(error) = payload.get("error")
    {
        return Err(ClientError::remote(
            function,
            service,
            format!("resulted in error: '{}'", value_text(error)),
        ));
    }

    if let Some(status) = payload.get("status") {
        let code = status.as_i64().ok_or_else(|| {
            ClientError::unpacking(format!(
                "Status from '{function}' on '{service}' is not an integer: {status}"
            ))
        })?;

        if code != STATUS_OK {
            return match payload.get("exception") {
                Some(exception) => Err(ClientError::remote_exception(
                    function,
                    service,
                    field_text(exception, "class"),
                    field_text(exception, "module"),
                    field_text(exception, "error"),
                )),
                None => Err(ClientError::remote(
                    function,
                    service,
                    format!(
                        "exited with status {code}: {}",
                        Value::Object(payload.clone())
                    ),
                )),
            };
        }
    }

    Ok(payload.get("return").filter(|v| !v.is_null()).cloned())
}

fn field_text(record: &Value, field: &str) -> String {
    record.get(field).map(value_text).unwrap_or_default()
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

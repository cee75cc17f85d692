use crate::identity::LoginUrl;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Data returned by the identity service for a login request.
///
/// The shape is owned by the service; the accessors only read well-known
/// fields when they are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoginPayload(pub Value);

impl LoginPayload {
    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    pub fn login_url(&self) -> Option<&str> {
        self.0.get("login_url").and_then(Value::as_str)
    }

    pub fn session_uid(&self) -> Option<&str> {
        self.0.get("session_uid").and_then(Value::as_str)
    }

    /// Short UID of the session, from `short_uid` or else the login URL.
    pub fn short_uid(&self) -> Option<String> {
        match self.0.get("short_uid").and_then(Value::as_str) {
            Some(short_uid) => Some(short_uid.to_string()),
            None => self
                .login_url()
                .and_then(LoginUrl::parse)
                .map(|url| url.short_uid),
        }
    }
}

impl From<Value> for LoginPayload {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

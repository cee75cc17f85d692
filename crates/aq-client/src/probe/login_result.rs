use crate::identity::LoginPayload;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::Value;

/// Outcome of one login request.
///
/// Serializes as `{"ok": true, "payload": ...}` or
/// `{"ok": false, "message": ..., "detail": ...}`.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginResult {
    Success { payload: LoginPayload },
    Failure { message: String, detail: Value },
}

impl LoginResult {
    pub fn success(payload: LoginPayload) -> Self {
        Self::Success { payload }
    }

    pub fn failure(message: impl Into<String>, detail: Value) -> Self {
        Self::Failure {
            message: message.into(),
            detail,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn payload(&self) -> Option<&LoginPayload> {
        match self {
            Self::Success { payload } => Some(payload),
            Self::Failure { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { message, .. } => Some(message),
        }
    }

    pub fn detail(&self) -> Option<&Value> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { detail, .. } => Some(detail),
        }
    }
}

impl Serialize for LoginResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Success { payload } => {
                let mut state = serializer.serialize_struct("LoginResult", 2)?;
                state.serialize_field("ok", &true)?;
                state.serialize_field("payload", payload)?;
                state.end()
            }
            Self::Failure { message, detail } => {
                let mut state = serializer.serialize_struct("LoginResult", 3)?;
                state.serialize_field("ok", &false)?;
                state.serialize_field("message", message)?;
                state.serialize_field("detail", detail)?;
                state.end()
            }
        }
    }
}

use crate::ErrorDetail;

use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::{Value, json};
use thiserror::Error;

/// Errors that can occur while calling a service function
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error(
        "Cannot call remote function '{function}' at '{service}'. Invalid status {status} returned: {body} {location}"
    )]
    Status {
        function: String,
        service: String,
        status: u16,
        body: String,
        location: ErrorLocation,
    },

    #[error("Calling '{function}' on '{service}' failed: {message} {location}")]
    Remote {
        function: String,
        service: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Error calling '{function}' on '{service}': {class}: {error} {location}")]
    RemoteException {
        function: String,
        service: String,
        class: String,
        module: String,
        error: String,
        location: ErrorLocation,
    },

    #[error("Unpacking error: {message} {location}")]
    Unpacking {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Transport failure while calling `function` on `service`
    #[track_caller]
    pub fn network(function: &str, service: &str, err: reqwest::Error) -> Self {
        ClientError::Http {
            message: format!(
                "Cannot call remote function '{function}' at '{service}' because of a possible network issue: {err}"
            ),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn status(function: &str, service: &str, status: u16, body: String) -> Self {
        ClientError::Status {
            function: function.to_string(),
            service: service.to_string(),
            status,
            body,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn remote(function: &str, service: &str, message: impl Into<String>) -> Self {
        ClientError::Remote {
            function: function.to_string(),
            service: service.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn remote_exception(
        function: &str,
        service: &str,
        class: impl Into<String>,
        module: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        ClientError::RemoteException {
            function: function.to_string(),
            service: service.to_string(),
            class: class.into(),
            module: module.into(),
            error: error.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unpacking(message: impl Into<String>) -> Self {
        ClientError::Unpacking {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Short machine-readable name of the variant
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Http { .. } => "http",
            Self::Status { .. } => "status",
            Self::Remote { .. } => "remote",
            Self::RemoteException { .. } => "remote_exception",
            Self::Unpacking { .. } => "unpacking",
            Self::Json { .. } => "json",
        }
    }
}

impl ErrorDetail for ClientError {
    /// Capture locations and source chains are not part of the record.
    fn to_detail(&self) -> serde_json::Result<Value> {
        let detail = match self {
            Self::Http {
                message, source, ..
            } => json!({
                "kind": self.kind(),
                "message": message,
                "status": source.status().map(|s| s.as_u16()),
                "timeout": source.is_timeout(),
            }),
            Self::Status {
                function,
                service,
                status,
                body,
                ..
            } => json!({
                "kind": self.kind(),
                "function": function,
                "service": service,
                "status": status,
                "body": serde_json::from_str::<Value>(body)
                    .unwrap_or_else(|_| Value::String(body.clone())),
            }),
            Self::Remote {
                function,
                service,
                message,
                ..
            } => json!({
                "kind": self.kind(),
                "function": function,
                "service": service,
                "message": message,
            }),
            Self::RemoteException {
                function,
                service,
                class,
                module,
                error,
                ..
            } => json!({
                "kind": self.kind(),
                "function": function,
                "service": service,
                "class": class,
                "module": module,
                "error": error,
            }),
            Self::Unpacking { message, .. } | Self::Json { message, .. } => json!({
                "kind": self.kind(),
                "message": message,
            }),
        };

        Ok(detail)
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

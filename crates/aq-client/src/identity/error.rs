use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised while constructing an identity.
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Invalid username '{username}': {message} {location}")]
    InvalidUsername {
        username: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to construct identity: {message} {location}")]
    Construction {
        message: String,
        location: ErrorLocation,
    },
}

impl IdentityError {
    /// Creates InvalidUsername error at caller location.
    #[track_caller]
    pub fn invalid_username(username: &str, message: impl Into<String>) -> Self {
        Self::InvalidUsername {
            username: username.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Construction error at caller location.
    #[track_caller]
    pub fn construction(message: impl Into<String>) -> Self {
        Self::Construction {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, IdentityError>;

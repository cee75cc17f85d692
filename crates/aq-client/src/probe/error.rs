use crate::identity::IdentityError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures that escape a probe run
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Failed to construct identity: {source} {location}")]
    Identity {
        #[source]
        source: IdentityError,
        location: ErrorLocation,
    },

    #[error("Failed to convert login error into a structured record: {source} {location}")]
    Detail {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl ProbeError {
    #[track_caller]
    pub fn detail(source: serde_json::Error) -> Self {
        Self::Detail {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<IdentityError> for ProbeError {
    #[track_caller]
    fn from(source: IdentityError) -> Self {
        Self::Identity {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProbeError>;

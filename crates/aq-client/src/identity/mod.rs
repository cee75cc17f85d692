pub(crate) mod error;
pub(crate) mod login_payload;
pub(crate) mod login_url;
pub(crate) mod user;

pub use error::{IdentityError, Result as IdentityResult};
pub use login_payload::LoginPayload;
pub use login_url::LoginUrl;
pub use user::{AcquireIdentityFactory, REQUEST_LOGIN_FUNCTION, User};

use crate::ErrorDetail;

use aq_config::MAX_USERNAME_LENGTH;
use async_trait::async_trait;

/// Options passed to an [`IdentityFactory`] when building an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityOptions {
    pub username: String,
}

impl IdentityOptions {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// Client-side handle for a user of an identity service.
#[async_trait]
pub trait Identity: Send + Sync {
    type Error: std::error::Error + ErrorDetail + Send + Sync + 'static;

    fn username(&self) -> &str;

    /// Ask the identity service to open a login session for this user.
    async fn request_login(&self) -> Result<LoginPayload, Self::Error>;
}

/// Builds identities from options.
pub trait IdentityFactory: Send + Sync {
    type Identity: Identity;

    fn make_identity(&self, options: IdentityOptions) -> IdentityResult<Self::Identity>;
}

/// Usernames must be non-blank and at most [`MAX_USERNAME_LENGTH`] bytes.
#[track_caller]
pub(crate) fn validate_username(username: &str) -> IdentityResult<()> {
    if username.trim().is_empty() {
        return Err(IdentityError::invalid_username(
            username,
            "username cannot be empty",
        ));
    }

    if username.len() > MAX_USERNAME_LENGTH {
        return Err(IdentityError::invalid_username(
            username,
            format!("username must be at most {MAX_USERNAME_LENGTH} bytes"),
        ));
    }

    Ok(())
}

use crate::client::{ClientError, ServiceClient};
use crate::identity::{
    Identity, IdentityFactory, IdentityOptions, IdentityResult, LoginPayload, validate_username,
};

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use serde::Serialize;

/// Name of the identity service function that opens a login session
pub const REQUEST_LOGIN_FUNCTION: &str = "request_login";

/// A user of an Acquire identity service
#[derive(Debug, Clone)]
pub struct User {
    username: String,
    login_message: Option<String>,
    client: Arc<ServiceClient>,
}

impl User {
    pub fn new(options: IdentityOptions, client: Arc<ServiceClient>) -> IdentityResult<Self> {
        validate_username(&options.username)?;

        Ok(Self {
            username: options.username,
            login_message: None,
            client,
        })
    }

    /// Message the identity service shows on the login page
    pub fn with_login_message(mut self, login_message: Option<String>) -> Self {
        self.login_message = login_message;
        self
    }

    pub fn identity_url(&self) -> &str {
        &self.client.service_url
    }
}

#[async_trait]
impl Identity for User {
    type Error = ClientError;

    fn username(&self) -> &str {
        &self.username
    }

    async fn request_login(&self) -> Result<LoginPayload, ClientError> {
        #[derive(Serialize)]
        struct RequestLoginArgs<'a> {
            username: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            login_message: Option<&'a str>,
        }

        let args = serde_json::to_value(RequestLoginArgs {
            username: &self.username,
            login_message: self.login_message.as_deref(),
        })?;

        debug!("Requesting login for '{}'", self.username);

        match self.client.call_function(REQUEST_LOGIN_FUNCTION, args).await? {
            Some(value) => Ok(LoginPayload::from(value)),
            None => Err(ClientError::unpacking(format!(
                "Calling '{}' on '{}' returned no login session",
                REQUEST_LOGIN_FUNCTION, self.client.service_url
            ))),
        }
    }
}

/// Builds [`User`]s that talk to one identity service
#[derive(Debug, Clone)]
pub struct AcquireIdentityFactory {
    client: Arc<ServiceClient>,
    login_message: Option<String>,
}

impl AcquireIdentityFactory {
    pub fn new(client: ServiceClient) -> Self {
        Self {
            client: Arc::new(client),
            login_message: None,
        }
    }

    pub fn with_login_message(mut self, login_message: Option<String>) -> Self {
        self.login_message = login_message;
        self
    }
}

impl IdentityFactory for AcquireIdentityFactory {
    type Identity = User;

    fn make_identity(&self, options: IdentityOptions) -> IdentityResult<User> {
        Ok(User::new(options, Arc::clone(&self.client))?
            .with_login_message(self.login_message.clone()))
    }
}

use crate::client::{ClientError, ClientResult, FunctionCall, unpack_return_value};

use std::time::Duration;

use log::debug;
use reqwest::{Client as ReqwestClient, StatusCode};
use serde_json::Value;

/// HTTP client for calling functions on one Acquire service
#[derive(Debug, Clone)]
pub struct ServiceClient {
    pub service_url: String,
    client: ReqwestClient,
}

impl ServiceClient {
    /// Create a new client with no transport timeout
    ///
    /// # Arguments
    /// * `service_url` - Service URL (e.g., "http://127.0.0.1:8080/t/identity")
    pub fn new(service_url: &str) -> Self {
        Self {
            service_url: Self::normalize(service_url),
            client: ReqwestClient::new(),
        }
    }

    /// Create a new client whose calls give up after `timeout`
    pub fn with_timeout(service_url: &str, timeout: Duration) -> ClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            service_url: Self::normalize(service_url),
            client,
        })
    }

    fn normalize(service_url: &str) -> String {
        service_url.trim_end_matches('/').to_string()
    }

    /// Call `function` on the service, passing `args` as its payload.
    ///
    /// Returns the function's return value, or `None` if it returned nothing.
    pub async fn call_function(&self, function: &str, args: Value) -> ClientResult<Option<Value>> {
        let call = FunctionCall::new(function, &args);

        debug!("Calling '{}' on '{}'", function, self.service_url);

        let response = self
            .client
            .post(&self.service_url)
            .json(&call)
            .send()
            .await
            .map_err(|e| ClientError::network(function, &self.service_url, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::network(function, &self.service_url, e))?;

        if status != StatusCode::OK {
            return Err(ClientError::status(
                function,
                &self.service_url,
                status.as_u16(),
                body,
            ));
        }

        let data: Value = serde_json::from_str(&body)?;

        unpack_return_value(data, function, &self.service_url)
    }
}

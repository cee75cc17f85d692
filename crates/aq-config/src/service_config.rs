use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_SCHEME, DEFAULT_TIMEOUT_SECS,
    IDENTITY_SERVICE, MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Where the Acquire services live.
///
/// Services are reached at `<scheme>://<host>/t/<service>` unless an explicit
/// identity URL is configured.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Service host, with or without a scheme prefix (the prefix is ignored)
    pub host: String,
    pub scheme: String,
    /// Full identity service URL, overrides `host`
    pub identity_url: Option<String>,
    /// Transport timeout for a single function call
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            scheme: String::from(DEFAULT_SCHEME),
            identity_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.scheme != "http" && self.scheme != "https" {
            return Err(ConfigError::service(format!(
                "service.scheme must be http or https, got '{}'",
                self.scheme
            )));
        }

        if self.bare_host().is_empty() {
            return Err(ConfigError::service("service.host cannot be empty"));
        }

        if let Some(ref url) = self.identity_url
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            return Err(ConfigError::service(format!(
                "service.identity_url must start with http:// or https://, got '{url}'"
            )));
        }

        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::service(format!(
                "service.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    /// Host with any scheme prefix and trailing slash removed.
    pub fn bare_host(&self) -> &str {
        let host = self.host.trim();
        let host = host
            .strip_prefix("https://")
            .or_else(|| host.strip_prefix("http://"))
            .unwrap_or(host);
        host.trim_end_matches('/')
    }

    /// URL of the named service on the configured host.
    pub fn service_url(&self, service: &str) -> String {
        format!("{}://{}/t/{}", self.scheme, self.bare_host(), service)
    }

    /// URL of the identity service.
    pub fn identity_url(&self) -> String {
        match self.identity_url {
            Some(ref url) => url.trim_end_matches('/').to_string(),
            None => self.service_url(IDENTITY_SERVICE),
        }
    }
}

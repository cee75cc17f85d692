use crate::{ConfigError, ConfigErrorResult, MAX_USERNAME_LENGTH, OutputMode};

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Username used when none is given on the command line
    pub username: Option<String>,
    /// Message shown by the identity service on the login page
    pub login_message: Option<String>,
    pub output: OutputMode,
    /// Pretty-print JSON values on stdout
    pub pretty: bool,
}

impl ProbeConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(ref username) = self.username {
            if username.trim().is_empty() {
                return Err(ConfigError::probe("probe.username cannot be blank"));
            }

            if username.len() > MAX_USERNAME_LENGTH {
                return Err(ConfigError::probe(format!(
                    "probe.username must be at most {} bytes, got {}",
                    MAX_USERNAME_LENGTH,
                    username.len()
                )));
            }
        }

        Ok(())
    }
}

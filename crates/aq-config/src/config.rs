use crate::{ConfigError, ConfigErrorResult, LoggingConfig, ProbeConfig, ServiceConfig};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub probe: ProbeConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for AQ_CONFIG_DIR env var, else use ./.aq/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply AQ_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: AQ_CONFIG_DIR env var > ./.aq/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("AQ_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".aq"))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.service.validate()?;
        self.probe.validate()?;

        if let Some(ref file) = self.logging.file
            && (file.contains('/') || file.contains('\\') || file.contains(".."))
        {
            return Err(ConfigError::logging(
                "logging.file must be a bare file name inside logging.dir",
            ));
        }

        Ok(())
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  service: identity={} (timeout {}s)",
            self.service.identity_url(),
            self.service.timeout_secs
        );
        info!(
            "  probe: username={}, output={}",
            self.probe.username.as_deref().unwrap_or("<unset>"),
            self.probe.output
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Service
        Self::apply_env_string("AQ_HOST", &mut self.service.host);
        Self::apply_env_string("AQ_SCHEME", &mut self.service.scheme);
        Self::apply_env_option_string("AQ_IDENTITY_URL", &mut self.service.identity_url);
        Self::apply_env_parse("AQ_TIMEOUT_SECS", &mut self.service.timeout_secs);

        // Probe
        Self::apply_env_option_string("AQ_USERNAME", &mut self.probe.username);
        Self::apply_env_option_string("AQ_LOGIN_MESSAGE", &mut self.probe.login_message);
        Self::apply_env_parse("AQ_OUTPUT", &mut self.probe.output);
        Self::apply_env_bool("AQ_PRETTY", &mut self.probe.pretty);

        // Logging
        Self::apply_env_parse("AQ_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("AQ_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("AQ_LOG_FILE", &mut self.logging.file);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}

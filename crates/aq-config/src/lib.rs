mod config;
mod error;
mod log_level;
mod logging_config;
mod output_mode;
mod probe_config;
mod service_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use output_mode::OutputMode;
pub use probe_config::ProbeConfig;
pub use service_config::ServiceConfig;

const DEFAULT_HOST: &str = "127.0.0.1:8080";
const DEFAULT_SCHEME: &str = "http";
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 600;
const IDENTITY_SERVICE: &str = "identity";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
/// Longest username, in bytes, accepted by config and by identity construction.
pub const MAX_USERNAME_LENGTH: usize = 256;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Where probe results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Through the `log` facade
    #[default]
    Log,
    /// Plain lines on stdout
    Stdout,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "log" => Ok(OutputMode::Log),
            "stdout" => Ok(OutputMode::Stdout),
            other => Err(format!("unknown output mode '{other}' (expected log or stdout)")),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Log => write!(f, "log"),
            OutputMode::Stdout => write!(f, "stdout"),
        }
    }
}

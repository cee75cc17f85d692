use std::sync::{Mutex, PoisonError};

use log::{error, info};
use serde_json::Value;

/// Sink for what a probe run reports.
pub trait ProbeOutput: Send + Sync {
    fn emit_message(&self, message: &str);
    fn emit_value(&self, value: &Value);
}

/// Log target for login reports. The logger lets it through at info even when
/// the configured level is stricter.
pub const LOGIN_REPORT_TARGET: &str = "aq::login";

/// Writes through the `log` facade under [`LOGIN_REPORT_TARGET`]: messages at
/// error, values at info.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogOutput;

impl ProbeOutput for LogOutput {
    fn emit_message(&self, message: &str) {
        error!(target: LOGIN_REPORT_TARGET, "{message}");
    }

    fn emit_value(&self, value: &Value) {
        info!(target: LOGIN_REPORT_TARGET, "{value}");
    }
}

/// Prints each emission as one line (or one pretty block) on stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutOutput {
    pub pretty: bool,
}

impl StdoutOutput {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Text printed for `value`.
    pub fn render(&self, value: &Value) -> String {
        if self.pretty {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        } else {
            value.to_string()
        }
    }
}

impl ProbeOutput for StdoutOutput {
    fn emit_message(&self, message: &str) {
        println!("{message}");
    }

    fn emit_value(&self, value: &Value) {
        println!("{}", self.render(value));
    }
}

/// One item written to an output
#[derive(Debug, Clone, PartialEq)]
pub enum Emission {
    Message(String),
    Value(Value),
}

/// Keeps every emission in order, for callers that inspect them afterwards.
#[derive(Debug, Default)]
pub struct MemoryOutput {
    emissions: Mutex<Vec<Emission>>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emissions(&self) -> Vec<Emission> {
        self.emissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear(&self) {
        self.emissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn push(&self, emission: Emission) {
        self.emissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(emission);
    }
}

impl ProbeOutput for MemoryOutput {
    fn emit_message(&self, message: &str) {
        self.push(Emission::Message(message.to_string()));
    }

    fn emit_value(&self, value: &Value) {
        self.push(Emission::Value(value.clone()));
    }
}

use crate::identity::{Identity, IdentityFactory, IdentityOptions};
use crate::probe::{ErrorDetail, LoginResult, ProbeError, ProbeOutput, ProbeResult};

use log::debug;

/// Prefix of the message emitted when a login request fails
pub const UNCAUGHT_EXCEPTION_PREFIX: &str = "UNCAUGHT EXCEPTION: ";

/// Requests a login for a username and reports the outcome.
///
/// Each run builds a fresh identity; nothing is carried between runs.
#[derive(Debug)]
pub struct LoginProbe<F, O> {
    factory: F,
    output: O,
}

impl<F, O> LoginProbe<F, O>
where
    F: IdentityFactory,
    O: ProbeOutput,
{
    pub fn new(factory: F, output: O) -> Self {
        Self { factory, output }
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Request a login for `username`.
    ///
    /// A failed login request is reported to the output and returned as
    /// [`LoginResult::Failure`]. Identity construction errors and failures to
    /// convert the login error into a record are returned as `Err`.
    pub async fn run(&self, username: &str) -> ProbeResult<LoginResult> {
        let identity = self
            .factory
            .make_identity(IdentityOptions::new(username))?;

        debug!("Probing login for '{}'", identity.username());

        match identity.request_login().await {
            Ok(payload) => {
                self.output.emit_value(payload.value());
                Ok(LoginResult::success(payload))
            }
            Err(err) => {
                let message = format!("{UNCAUGHT_EXCEPTION_PREFIX}{err}");
                self.output.emit_message(&message);

                let detail = err.to_detail().map_err(ProbeError::detail)?;
                self.output.emit_value(&detail);

                Ok(LoginResult::failure(message, detail))
            }
        }
    }
}

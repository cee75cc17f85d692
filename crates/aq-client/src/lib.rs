//! aq-client library
//!
//! Client side of the Acquire identity service: a function-call client, the
//! `User` identity, and the login probe that reports what a login request
//! returns.

pub(crate) mod client;
pub(crate) mod identity;
pub mod logger;
pub(crate) mod probe;

#[cfg(test)]
mod tests;

pub use client::{ClientError, ClientResult, FunctionCall, ServiceClient, unpack_return_value};
pub use identity::{
    AcquireIdentityFactory, Identity, IdentityError, IdentityFactory, IdentityOptions,
    IdentityResult, LoginPayload, LoginUrl, REQUEST_LOGIN_FUNCTION, User,
};
pub use probe::{
    Emission, ErrorDetail, LOGIN_REPORT_TARGET, LogOutput, LoginProbe, LoginResult, MemoryOutput,
    ProbeError, ProbeOutput, ProbeResult, StdoutOutput, UNCAUGHT_EXCEPTION_PREFIX,
};

pub(crate) mod error;
pub(crate) mod error_detail;
pub(crate) mod login_probe;
pub(crate) mod login_result;
pub(crate) mod output;

pub use error::{ProbeError, Result as ProbeResult};
pub use error_detail::ErrorDetail;
pub use login_probe::{LoginProbe, UNCAUGHT_EXCEPTION_PREFIX};
pub use login_result::LoginResult;
pub use output::{
    Emission, LOGIN_REPORT_TARGET, LogOutput, MemoryOutput, ProbeOutput, StdoutOutput,
};

pub(crate) mod client;
pub(crate) mod envelope;
pub(crate) mod error;

pub use client::ServiceClient;
pub use envelope::{FunctionCall, unpack_return_value};
pub use error::{ClientError, Result as ClientResult};

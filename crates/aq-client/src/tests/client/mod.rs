mod client;
mod envelope;
mod error;

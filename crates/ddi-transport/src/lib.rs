//! HTTP transport for the DDI polling agent.
//!
//! This crate performs the raw network I/O the agent depends on: blocking
//! GET, POST-with-body, and streamed file download against a URL. It knows
//! nothing about the deployment protocol built on top of it; callers get a
//! normalized [`TransportResponse`] (or a boolean for downloads) and decide
//! what the payload means.
//!
//! Transport-level failures (DNS, connect, TLS, timeout) are part of the
//! normal contract and are encoded in the response itself: status `0` and
//! an empty body. The `Result` returned by the [`Transport`] trait is
//! reserved for faults outside that contract, such as a broken alternative
//! implementation.

mod http;
mod response;
mod transport;

pub use http::HttpTransport;
pub use response::TransportResponse;
pub use transport::Transport;

/// Error types for transport operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// HTTP client construction failed
    #[error("Failed to build HTTP client: {0}")]
    Init(#[from] reqwest::Error),

    /// Other transport fault
    #[error("Transport fault: {0}")]
    Other(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

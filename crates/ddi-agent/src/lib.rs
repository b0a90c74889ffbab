//! # DDI Polling Agent
//!
//! Device-side core of a minimal pull-based deployment protocol: the agent
//! periodically asks a control plane whether work is pending, downloads
//! the artifact when a deployment is assigned, and reports the outcome
//! back before waiting for the next cycle.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ddi_agent::{AgentConfig, PollingAgent, shutdown_channel};
//!
//! # async fn example() -> ddi_agent::Result<()> {
//! let config = AgentConfig::new("http://localhost:8000", "device001");
//! let agent = PollingAgent::new(config)?;
//!
//! let (_handle, signal) = shutdown_channel();
//! agent.run(signal).await;
//! # Ok(())
//! # }
//! ```

mod config;
mod descriptor;
mod events;
mod orchestrator;
pub mod parser;
mod report;
mod shutdown;

pub use config::AgentConfig;
pub use descriptor::DeploymentDescriptor;
pub use events::{EventSink, TracingEventSink};
pub use orchestrator::{AgentState, CycleOutcome, PollingAgent};
pub use report::{ReportStatus, StatusReport};
pub use shutdown::{ShutdownHandle, ShutdownSignal, shutdown_channel};

/// Error types for agent operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Transport errors
    #[error("Transport error: {0}")]
    Transport(#[from] ddi_transport::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other error
    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

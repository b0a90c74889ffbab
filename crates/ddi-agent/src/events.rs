//! Observability seam for the agent.

use tracing::info;

/// Sink for human-readable progress and error notices.
///
/// The orchestrator reports poll results, download results, report
/// outcomes and per-cycle failures through this single method. The core
/// depends only on this trait, not on any particular logging framework.
pub trait EventSink: Send + Sync {
    /// Record one event.
    fn record(&self, message: &str);
}

/// Event sink that forwards every notice to the `tracing` subscriber.
#[derive(Debug, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn record(&self, message: &str) {
        info!("{}", message);
    }
}

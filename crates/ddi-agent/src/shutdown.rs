//! Cooperative shutdown for the polling loop.
//!
//! The loop checks the signal at the top of every cycle and races it
//! against the inter-cycle timer, so shutdown takes effect without waiting
//! out the full poll interval.

use async_channel::{Receiver, Sender};

/// Create a connected handle/signal pair.
pub fn shutdown_channel() -> (ShutdownHandle, ShutdownSignal) {
    let (tx, rx) = async_channel::bounded::<()>(1);
    (ShutdownHandle { tx }, ShutdownSignal { rx })
}

/// Requests shutdown of the polling loop.
///
/// Dropping the handle triggers shutdown as well; keep it alive for as
/// long as the loop should run.
pub struct ShutdownHandle {
    tx: Sender<()>,
}

impl ShutdownHandle {
    /// Ask the loop to stop at the next opportunity.
    pub fn trigger(&self) {
        self.tx.close();
    }
}

/// Signal observed by the polling loop.
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    rx: Receiver<()>,
}

impl ShutdownSignal {
    /// Whether shutdown has been requested.
    pub fn is_triggered(&self) -> bool {
        self.rx.is_closed()
    }

    /// Resolve once shutdown is requested.
    pub async fn triggered(&self) {
        let _ = self.rx.recv().await;
    }
}

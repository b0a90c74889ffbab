//! The poll → evaluate → download → report loop.

use std::sync::{Arc, RwLock};

use ddi_transport::{HttpTransport, Transport};
use smol::Timer;
use tracing::{debug, info, warn};

use crate::{
    AgentConfig, DeploymentDescriptor, EventSink, Result, ShutdownSignal, StatusReport,
    TracingEventSink, parser,
};

const REPORT_CONTENT_TYPE: &str = "application/json";

/// Observable position of the agent within a polling cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentState {
    /// Between cycles
    Idle,
    /// Asking the control plane for pending work
    Polling,
    /// Fetching the artifact of an assigned deployment
    Downloading,
    /// Posting the deployment outcome
    Reporting,
}

/// What one polling cycle amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Nothing to do: no deployment pending, or the poll did not yield 200
    NoUpdate,
    /// A deployment was processed
    Completed {
        /// Deployment identifier
        deployment_id: String,
        /// Whether the artifact download succeeded
        downloaded: bool,
        /// Whether the control plane acknowledged the status report
        reported: bool,
    },
}

/// Device-side agent driving the pull-based deployment protocol.
///
/// One agent instance owns one transport and runs cycles strictly
/// sequentially; no transport call ever overlaps another.
pub struct PollingAgent {
    config: AgentConfig,
    transport: Arc<dyn Transport>,
    sink: Arc<dyn EventSink>,
    state: RwLock<AgentState>,
}

impl PollingAgent {
    /// Create an agent with the default HTTP transport and tracing sink.
    pub fn new(config: AgentConfig) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new()?);
        Ok(Self::with_transport(
            config,
            transport,
            Arc::new(TracingEventSink),
        ))
    }

    /// Create an agent over an explicit transport and event sink.
    pub fn with_transport(
        config: AgentConfig,
        transport: Arc<dyn Transport>,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            config,
            transport,
            sink,
            state: RwLock::new(AgentState::Idle),
        }
    }

    /// The agent's configuration.
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Current position within the cycle.
    pub fn current_state(&self) -> AgentState {
        *self.state.read().unwrap()
    }

    fn enter(&self, state: AgentState) {
        *self.state.write().unwrap() = state;
        debug!("Agent state: {:?}", state);
    }

    /// Ask the control plane whether work is pending.
    ///
    /// Transport failures and non-200 answers both come back as an empty
    /// descriptor; "could not ask" and "nothing to do" are not
    /// distinguished at this layer.
    pub async fn poll_once(&self) -> Result<DeploymentDescriptor> {
        let url = self.config.polling_url();
        debug!("Polling {}", url);

        let response = self.transport.get(&url).await?;
        if !response.is_ok() {
            self.sink.record(&format!(
                "Poll failed with status code: {}",
                response.status
            ));
            return Ok(DeploymentDescriptor::default());
        }

        Ok(parser::parse_deployment(&response.body))
    }

    async fn download(&self, descriptor: &DeploymentDescriptor) -> Result<bool> {
        self.sink.record(&format!(
            "Downloading artifact from: {}",
            descriptor.download_url
        ));
        debug!("Declared artifact size: {} bytes", descriptor.size);

        let downloaded = self
            .transport
            .download_to_file(&descriptor.download_url, &self.config.download_path)
            .await?;

        if downloaded {
            self.sink.record(&format!(
                "Artifact downloaded to: {}",
                self.config.download_path.display()
            ));
        } else {
            self.sink.record("Artifact download failed");
        }

        Ok(downloaded)
    }

    async fn report(&self, deployment_id: &str, downloaded: bool) -> Result<bool> {
        let report = StatusReport::new(deployment_id, downloaded);
        self.sink.record(&format!(
            "Reporting status: {} for deployment: {}",
            report.status, deployment_id
        ));

        let body = serde_json::to_string(&report)?;
        let url = self.config.status_url(deployment_id);

        let response = self.transport.post(&url, body, REPORT_CONTENT_TYPE).await?;
        let reported = response.is_ok();
        if reported {
            self.sink.record("Status reported successfully");
        } else {
            // A failed report is observed, never retried.
            self.sink.record(&format!(
                "Status report failed with code: {}",
                response.status
            ));
        }

        Ok(reported)
    }

    /// Run one poll → evaluate → download → report cycle.
    pub async fn run_cycle(&self) -> Result<CycleOutcome> {
        let outcome = self.cycle_body().await;
        self.enter(AgentState::Idle);
        outcome
    }

    async fn cycle_body(&self) -> Result<CycleOutcome> {
        self.enter(AgentState::Polling);
        let descriptor = self.poll_once().await?;

        if !descriptor.has_deployment() {
            self.sink.record("No updates available");
            return Ok(CycleOutcome::NoUpdate);
        }
        self.sink
            .record(&format!("New deployment found: {}", descriptor.id));

        self.enter(AgentState::Downloading);
        let downloaded = self.download(&descriptor).await?;

        self.enter(AgentState::Reporting);
        let reported = self.report(&descriptor.id, downloaded).await?;

        Ok(CycleOutcome::Completed {
            deployment_id: descriptor.id,
            downloaded,
            reported,
        })
    }

    /// Drive polling cycles until `shutdown` triggers.
    ///
    /// Errors escaping one cycle are recorded and the loop moves on to the
    /// next cycle after the usual wait; a single bad cycle never takes the
    /// agent down.
    pub async fn run(&self, shutdown: ShutdownSignal) {
        info!(
            "Starting polling loop for controller {} against {}",
            self.config.controller_id, self.config.server_url
        );

        loop {
            if shutdown.is_triggered() {
                break;
            }

            match self.run_cycle().await {
                Ok(CycleOutcome::NoUpdate) => debug!("Cycle finished without an update"),
                Ok(CycleOutcome::Completed {
                    deployment_id,
                    downloaded,
                    ..
                }) => {
                    if downloaded {
                        info!("Deployment {} completed successfully", deployment_id);
                    } else {
                        warn!("Deployment {} failed", deployment_id);
                    }
                }
                Err(err) => {
                    warn!("Polling cycle failed: {}", err);
                    self.sink
                        .record(&format!("Error in polling loop: {}", err));
                }
            }

            self.wait_for_next_cycle(&shutdown).await;
        }

        info!("Polling loop stopped");
    }

    /// Sleep the poll interval, waking early if shutdown triggers.
    async fn wait_for_next_cycle(&self, shutdown: &ShutdownSignal) {
        let wait = async {
            Timer::after(self.config.poll_interval).await;
        };
        smol::future::or(shutdown.triggered(), wait).await;
    }
}

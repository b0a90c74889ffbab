//! Agent identity and timing configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default wait between polling cycles.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Default location for the downloaded artifact, overwritten each cycle.
pub const DEFAULT_DOWNLOAD_PATH: &str = "downloaded_firmware.bin";

/// Identity and timing for one agent instance.
///
/// Immutable for the process lifetime; the orchestrator only reads it to
/// build protocol URLs and to pace the loop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgentConfig {
    /// Base URL of the control plane, without a trailing slash
    pub server_url: String,
    /// Controller identifier this device presents to the control plane
    pub controller_id: String,
    /// Wait between polling cycles
    pub poll_interval: Duration,
    /// Where the downloaded artifact is written
    pub download_path: PathBuf,
}

impl AgentConfig {
    /// Create a config with the default poll interval and download path.
    pub fn new(server_url: impl Into<String>, controller_id: impl Into<String>) -> Self {
        let server_url = server_url.into();
        Self {
            server_url: server_url.trim_end_matches('/').to_string(),
            controller_id: controller_id.into(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            download_path: PathBuf::from(DEFAULT_DOWNLOAD_PATH),
        }
    }

    /// Set the wait between polling cycles.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Set the path the artifact is downloaded to.
    pub fn with_download_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.download_path = path.into();
        self
    }

    /// URL the agent polls for pending deployments.
    pub fn polling_url(&self) -> String {
        format!(
            "{}/rest/v1/ddi/v1/controller/device/{}",
            self.server_url, self.controller_id
        )
    }

    /// URL deployment outcomes are reported to.
    pub fn status_url(&self, deployment_id: &str) -> String {
        format!(
            "{}/rest/v1/ddi/v1/controller/device/{}/deploymentBase/{}",
            self.server_url, self.controller_id, deployment_id
        )
    }
}

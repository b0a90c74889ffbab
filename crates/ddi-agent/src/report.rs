//! Wire body for deployment status reports.

use std::fmt;

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Outcome reported to the control plane for one deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportStatus {
    /// The artifact was downloaded successfully
    Success,
    /// The download failed
    Failure,
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportStatus::Success => write!(f, "SUCCESS"),
            ReportStatus::Failure => write!(f, "FAILURE"),
        }
    }
}

/// Status report POSTed to the deployment feedback endpoint.
///
/// Serializes in declaration order to the wire format
/// `{"id":"...","time":"...","status":"...","details":[]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    /// Deployment the report refers to
    pub id: String,
    /// Human-readable local timestamp
    pub time: String,
    /// Outcome of the deployment
    pub status: ReportStatus,
    /// Detailed status messages; always empty in this agent
    pub details: Vec<String>,
}

impl StatusReport {
    /// Build a report for `deployment_id`, stamped with the current local
    /// time.
    pub fn new(deployment_id: &str, downloaded: bool) -> Self {
        let status = if downloaded {
            ReportStatus::Success
        } else {
            ReportStatus::Failure
        };

        Self {
            id: deployment_id.to_string(),
            time: Local::now().format("%a %b %e %H:%M:%S %Y").to_string(),
            status,
            details: Vec::new(),
        }
    }
}

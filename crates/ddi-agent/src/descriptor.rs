//! The value object handed from the response parser to the orchestrator.

/// Parsed representation of "is there a deployment, and if so, what/where".
///
/// Constructed fresh by the parser on every poll and discarded after one
/// cycle; never cached or persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentDescriptor {
    /// Opaque deployment identifier; empty means absent
    pub id: String,
    /// Absolute URL of the artifact; empty means absent
    pub download_url: String,
    /// Declared artifact size in bytes, informational only
    pub size: u64,
}

impl DeploymentDescriptor {
    /// True iff both the identifier and the download link were present.
    pub fn has_deployment(&self) -> bool {
        !self.id.is_empty() && !self.download_url.is_empty()
    }
}

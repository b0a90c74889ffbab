//! Normalized response type shared by all transport implementations.

use std::collections::HashMap;

/// Status code reserved for "no response at all": the request never made it
/// to a server, or the connection died before a status line arrived.
pub const STATUS_TRANSPORT_FAILURE: u16 = 0;

/// A normalized HTTP response.
///
/// Constructed per call and owned solely by the caller; nothing is shared
/// across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code; [`STATUS_TRANSPORT_FAILURE`] means the request
    /// failed at the transport level and never produced a real status.
    pub status: u16,
    /// Raw response payload.
    pub body: String,
    /// Response headers, last-write-wins on duplicate names.
    pub headers: HashMap<String, String>,
}

impl TransportResponse {
    /// Response representing a transport-level failure.
    pub fn transport_failure() -> Self {
        Self {
            status: STATUS_TRANSPORT_FAILURE,
            body: String::new(),
            headers: HashMap::new(),
        }
    }

    /// Whether the server answered with a plain 200.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

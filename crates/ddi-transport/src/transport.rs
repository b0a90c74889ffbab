//! The transport contract consumed by the orchestration layer.

use std::path::Path;

use async_trait::async_trait;

use crate::{Result, TransportResponse};

/// Abstract transport the agent drives its protocol over.
///
/// Implementations perform one attempt per call; retries, backoff and
/// authentication live above this layer (or nowhere at all). Failures the
/// transport can classify are reported inside the [`TransportResponse`]
/// (status `0`) or as a `false` download result, never as `Err`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform a GET request, following redirects.
    async fn get(&self, url: &str) -> Result<TransportResponse>;

    /// Perform a POST request with the given body and a single
    /// `Content-Type` header. Redirects are not followed.
    async fn post(&self, url: &str, body: String, content_type: &str) -> Result<TransportResponse>;

    /// Stream the response body for `url` directly into the file at
    /// `path`, truncating it first. Returns `false` if the file cannot be
    /// opened, the request fails at the transport level, or the final
    /// status is anything other than 200.
    async fn download_to_file(&self, url: &str, path: &Path) -> Result<bool>;
}

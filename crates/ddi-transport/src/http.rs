//! [`Transport`] implementation backed by `reqwest`'s blocking client.
//!
//! Each call runs on the blocking thread pool via [`smol::unblock`], so the
//! async caller suspends for the duration of the request without tying up
//! an executor thread. Response bodies are accumulated through a bounded
//! read buffer and downloads are streamed straight to disk; the payload is
//! never required to fit in a single in-memory buffer.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;
use reqwest::redirect;
use tracing::{debug, warn};

use crate::{Result, Transport, TransportResponse};

/// Fixed per-request timeout, covering connect and body transfer.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Chunk size for incremental body accumulation.
const READ_CHUNK: usize = 8 * 1024;

/// HTTP transport with a fixed 30 second timeout.
///
/// Holds two clients: one that follows redirects for GET and download, and
/// one that does not for POST. Both are released when the transport is
/// dropped; no process-global state is involved.
pub struct HttpTransport {
    client: Client,
    post_client: Client,
}

impl HttpTransport {
    /// Create a new transport, building its HTTP clients.
    pub fn new() -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let post_client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .redirect(redirect::Policy::none())
            .build()?;

        Ok(Self {
            client,
            post_client,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse> {
        let client = self.client.clone();
        let url = url.to_string();

        let response = smol::unblock(move || match client.get(&url).send() {
            Ok(response) => read_response(response),
            Err(err) => {
                warn!("GET {} failed: {}", url, err);
                TransportResponse::transport_failure()
            }
        })
        .await;

        Ok(response)
    }

    async fn post(&self, url: &str, body: String, content_type: &str) -> Result<TransportResponse> {
        let client = self.post_client.clone();
        let url = url.to_string();
        let content_type = content_type.to_string();

        let response = smol::unblock(move || {
            let request = client
                .post(&url)
                .header(CONTENT_TYPE, content_type)
                .body(body);
            match request.send() {
                Ok(response) => read_response(response),
                Err(err) => {
                    warn!("POST {} failed: {}", url, err);
                    TransportResponse::transport_failure()
                }
            }
        })
        .await;

        Ok(response)
    }

    async fn download_to_file(&self, url: &str, path: &Path) -> Result<bool> {
        let client = self.client.clone();
        let url = url.to_string();
        let path = path.to_path_buf();

        Ok(smol::unblock(move || stream_to_file(&client, &url, &path)).await)
    }
}

/// Drain a response, accumulating body and headers incrementally.
fn read_response(mut response: Response) -> TransportResponse {
    let status = response.status().as_u16();

    let mut headers = HashMap::new();
    for (name, value) in response.headers() {
        headers.insert(
            name.as_str().to_string(),
            String::from_utf8_lossy(value.as_bytes()).into_owned(),
        );
    }

    let mut body = Vec::new();
    let mut chunk = [0u8; READ_CHUNK];
    loop {
        match response.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => body.extend_from_slice(&chunk[..n]),
            Err(err) => {
                warn!("Reading response body failed: {}", err);
                return TransportResponse::transport_failure();
            }
        }
    }

    TransportResponse {
        status,
        body: String::from_utf8_lossy(&body).into_owned(),
        headers,
    }
}

fn stream_to_file(client: &Client, url: &str, path: &Path) -> bool {
    // Truncate the target before the request goes out; a failed download
    // must not leave stale bytes readable as a fresh artifact.
    let mut file = match File::create(path) {
        Ok(file) => file,
        Err(err) => {
            warn!("Cannot open {} for writing: {}", path.display(), err);
            return false;
        }
    };

    let mut response = match client.get(url).send() {
        Ok(response) => response,
        Err(err) => {
            warn!("Download request to {} failed: {}", url, err);
            return false;
        }
    };

    let status = response.status().as_u16();
    if status != 200 {
        debug!("Download from {} answered {}", url, status);
        return false;
    }

    match io::copy(&mut response, &mut file) {
        Ok(bytes) => {
            debug!("Wrote {} bytes to {}", bytes, path.display());
            true
        }
        Err(err) => {
            warn!("Streaming download from {} failed: {}", url, err);
            false
        }
    }
}

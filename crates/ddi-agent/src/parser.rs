//! Tolerant extraction of a deployment descriptor from a poll response.
//!
//! The body is scanned for the handful of fields the agent cares about
//! rather than validated as JSON. Fields may appear in any order or be
//! missing entirely; anything malformed degrades to "no deployment". The
//! parser never fails.

use crate::DeploymentDescriptor;

const DEPLOYMENT_MARKER: &str = "\"deploymentBase\"";
const ID_KEY: &str = "\"id\":";
const HREF_KEY: &str = "\"href\":";
const SIZE_KEY: &str = "\"size\":";

/// Extract a [`DeploymentDescriptor`] from a raw poll response body.
///
/// Without a deployment section the descriptor stays empty. A size that
/// fails to parse is left at 0 without affecting the other fields.
pub fn parse_deployment(body: &str) -> DeploymentDescriptor {
    let Some(marker) = body.find(DEPLOYMENT_MARKER) else {
        return DeploymentDescriptor::default();
    };

    // The identifier is looked up after the section marker; the download
    // link and size are independent of it.
    let id = string_field(body, ID_KEY, marker).unwrap_or_default();
    let download_url = string_field(body, HREF_KEY, 0).unwrap_or_default();
    let size = number_field(body, SIZE_KEY).unwrap_or(0);

    DeploymentDescriptor {
        id,
        download_url,
        size,
    }
}

/// The quoted value following `key`, searched from byte offset `from`.
fn string_field(body: &str, key: &str, from: usize) -> Option<String> {
    let key_pos = from + body.get(from..)?.find(key)?;
    let rest = &body[key_pos + key.len()..];
    let open = rest.find('"')?;
    let rest = &rest[open + 1..];
    let close = rest.find('"')?;
    Some(rest[..close].to_string())
}

/// The numeric value following `key`, up to the next `,` or `}`.
fn number_field(body: &str, key: &str) -> Option<u64> {
    let key_pos = body.find(key)?;
    let rest = &body[key_pos + key.len()..];
    let end = rest.find([',', '}']).unwrap_or(rest.len());
    rest[..end].trim().parse().ok()
}

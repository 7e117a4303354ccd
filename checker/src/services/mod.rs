//! Service client implementations

pub mod elasticsearch;
pub mod qdrant;
pub mod ollama;
pub mod twilio;

#[cfg(test)]
pub mod tests;

pub use elasticsearch::*;
pub use qdrant::*;
pub use ollama::*;
pub use twilio::*;

use serde_json::Value;
use url::Url;

use crate::error::ProbeError;

/// Longest error body kept in a status failure message
const MAX_ERROR_BODY: usize = 200;

/// Append `path` to `base` without dropping any path prefix `base` carries
pub(crate) fn endpoint_url(base: &Url, path: &str) -> String {
    format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Read a JSON body, treating any non-2xx status as a failure
pub(crate) async fn json_body(response: reqwest::Response) -> Result<Value, ProbeError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let body: String = body.trim().chars().take(MAX_ERROR_BODY).collect();
        return Err(ProbeError::Status { status, body });
    }

    decode_json(&body)
}

pub(crate) fn decode_json(body: &str) -> Result<Value, ProbeError> {
    serde_json::from_str(body).map_err(|e| ProbeError::Decode(e.to_string()))
}

//! Checker error types

use thiserror::Error;
use shared::{ServiceKind, SharedError};

/// Result type for checker setup operations
pub type CheckerResult<T> = Result<T, CheckerError>;

/// Fatal errors raised while setting up the checker
#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("Configuration error: {0}")]
    Config(#[from] SharedError),

    #[error("Failed to build {service} client: {message}")]
    ClientBuild { service: ServiceKind, message: String },
}

/// Why a single probe did not succeed
///
/// These never escape a probe; they are rendered into its report.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: reqwest::StatusCode, body: String },

    /// Status the service does not accept as healthy, reported without a message
    #[error("unexpected status {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    #[error("invalid response body: {0}")]
    Decode(String),
}

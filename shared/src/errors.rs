//! Shared error types for configuration handling

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Missing required configuration value: {key}")]
    MissingConfig { key: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Invalid URL in {field}: {value} ({source})")]
    InvalidUrl {
        field: String,
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to load env file {path}: {message}")]
    EnvFile { path: String, message: String },
}

pub type SharedResult<T> = Result<T, SharedError>;

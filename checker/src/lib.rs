//! Connectivity checker library
//!
//! Builds one client per external service (Elasticsearch, Qdrant, Twilio and a
//! local Ollama server) and probes each one, turning every outcome into a
//! printable report instead of an error.

pub mod error;
pub mod types;
pub mod traits;
pub mod manager;
pub mod services;

// Re-export main types
pub use error::{CheckerError, CheckerResult, ProbeError};
pub use types::*;
pub use traits::*;
pub use manager::{run_probe, ServiceManager};
pub use services::*;

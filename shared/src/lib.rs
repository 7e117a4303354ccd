//! Shared types for the service connectivity checker
//!
//! Holds what every consumer of the checker needs regardless of which
//! services it probes: configuration loading, service identifiers, the
//! shared error type and tracing setup.

pub mod config;
pub mod errors;
pub mod logging;
pub mod types;

pub use config::*;
pub use errors::*;
pub use types::*;

//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// External services the checker knows how to probe
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceKind {
    Elasticsearch,
    Qdrant,
    Ollama,
    Twilio,
}

impl ServiceKind {
    /// Label printed in front of the payload of a successful probe
    pub fn payload_label(&self) -> &'static str {
        match self {
            ServiceKind::Elasticsearch => "Cluster health",
            ServiceKind::Qdrant => "Available collections",
            ServiceKind::Ollama => "Available models",
            ServiceKind::Twilio => "Account",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ServiceKind::Elasticsearch => "Elasticsearch",
            ServiceKind::Qdrant => "Qdrant",
            ServiceKind::Ollama => "Ollama",
            ServiceKind::Twilio => "Twilio",
        };
        write!(f, "{}", name)
    }
}

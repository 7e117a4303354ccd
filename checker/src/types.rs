//! Probe outcome and report types

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::Value;

use shared::ServiceKind;

/// Result of probing one service
#[derive(Clone, Debug, PartialEq)]
pub enum ProbeOutcome {
    /// The service answered; carries the payload it returned
    Reachable(Value),
    /// The service could not be used; `None` when there is no error text to show
    Unreachable(Option<String>),
}

/// Everything known about one finished probe
#[derive(Clone, Debug)]
pub struct ProbeReport {
    pub service: ServiceKind,
    pub outcome: ProbeOutcome,
    pub checked_at: DateTime<Utc>,
    pub elapsed: Duration,
}

impl ProbeReport {
    pub fn new(service: ServiceKind, outcome: ProbeOutcome, checked_at: DateTime<Utc>, elapsed: Duration) -> Self {
        Self { service, outcome, checked_at, elapsed }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, ProbeOutcome::Reachable(_))
    }

    /// Lines printed to the console for this probe, if any
    pub fn console_text(&self) -> Option<String> {
        match &self.outcome {
            ProbeOutcome::Reachable(payload) => Some(format!(
                "{} connection successful!\n{}: {}",
                self.service,
                self.service.payload_label(),
                payload
            )),
            ProbeOutcome::Unreachable(Some(reason)) => {
                Some(format!("{} connection failed: {}", self.service, reason))
            }
            ProbeOutcome::Unreachable(None) => None,
        }
    }

    /// One-line status for the end-of-run summary
    pub fn summary_line(&self) -> String {
        let marker = if self.is_success() { "✅" } else { "❌" };
        format!(
            "{} {} ({} ms, checked at {})",
            marker,
            self.service,
            self.elapsed.as_millis(),
            self.checked_at.format("%H:%M:%S")
        )
    }
}

//! Checker trait definitions

use async_trait::async_trait;
use serde_json::Value;

use shared::ServiceKind;
use crate::error::ProbeError;

/// A service that can be asked whether it is reachable
#[mockall::automock]
#[async_trait]
pub trait HealthProbe: Send + Sync {
    /// Which service this probe talks to
    fn service(&self) -> ServiceKind;

    /// Issue one request and return the payload worth showing to the user
    async fn probe(&self) -> Result<Value, ProbeError>;
}

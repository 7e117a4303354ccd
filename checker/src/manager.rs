//! Service manager facade holding one client per probed service

use std::time::Instant;

use chrono::Utc;
use tracing::{info, warn};
use url::Url;

use shared::ServiceConfig;
use crate::error::{CheckerResult, ProbeError};
use crate::services::{ElasticsearchClient, OllamaClient, QdrantClient, TwilioClient};
use crate::traits::HealthProbe;
use crate::types::{ProbeOutcome, ProbeReport};

/// Run one probe, print its console lines and return the report
///
/// Never fails: every probe error becomes an unreachable outcome.
pub async fn run_probe(probe: &dyn HealthProbe) -> ProbeReport {
    let service = probe.service();
    let checked_at = Utc::now();
    let started = Instant::now();

    let outcome = match probe.probe().await {
        Ok(payload) => {
            info!("{} reachable", service);
            ProbeOutcome::Reachable(payload)
        }
        Err(ProbeError::UnexpectedStatus(status)) => {
            warn!("{} answered with status {}", service, status);
            ProbeOutcome::Unreachable(None)
        }
        Err(e) => {
            warn!("{} unreachable: {}", service, e);
            ProbeOutcome::Unreachable(Some(e.to_string()))
        }
    };

    let report = ProbeReport::new(service, outcome, checked_at, started.elapsed());
    if let Some(text) = report.console_text() {
        println!("{}", text);
    }
    report
}

/// Holds the four service handles for the lifetime of the process
pub struct ServiceManager {
    elasticsearch: ElasticsearchClient,
    qdrant: QdrantClient,
    twilio: TwilioClient,
    ollama: OllamaClient,
}

impl ServiceManager {
    /// Build every client from `config`
    ///
    /// Any client that cannot be built aborts construction.
    pub fn new(config: &ServiceConfig) -> CheckerResult<Self> {
        let manager = Self {
            elasticsearch: ElasticsearchClient::new(&config.elasticsearch)?,
            qdrant: QdrantClient::new(&config.qdrant)?,
            twilio: TwilioClient::new(&config.twilio)?,
            ollama: OllamaClient::new(&config.ollama)?,
        };
        info!("Service clients initialized (ollama at {})", manager.ollama_url());
        Ok(manager)
    }

    pub fn ollama_url(&self) -> &Url {
        self.ollama.base_url()
    }

    pub async fn test_elasticsearch_connection(&self) -> ProbeReport {
        run_probe(&self.elasticsearch).await
    }

    pub async fn test_qdrant_connection(&self) -> ProbeReport {
        run_probe(&self.qdrant).await
    }

    pub async fn test_ollama_connection(&self) -> ProbeReport {
        run_probe(&self.ollama).await
    }

    pub async fn test_twilio_connection(&self) -> ProbeReport {
        run_probe(&self.twilio).await
    }

    /// Probe services one after another
    ///
    /// Order is Elasticsearch, Qdrant, Ollama, then Twilio when `include_twilio` is set.
    pub async fn run_all(&self, include_twilio: bool) -> Vec<ProbeReport> {
        let mut reports = vec![
            self.test_elasticsearch_connection().await,
            self.test_qdrant_connection().await,
            self.test_ollama_connection().await,
        ];
        if include_twilio {
            reports.push(self.test_twilio_connection().await);
        }
        reports
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MockHealthProbe;
    use serde_json::json;
    use shared::ServiceKind;

    #[tokio::test]
    async fn test_run_probe_success() {
        let mut probe = MockHealthProbe::new();
        probe.expect_service().return_const(ServiceKind::Qdrant);
        probe
            .expect_probe()
            .times(1)
            .returning(|| Ok(json!({"collections": [{"name": "docs"}]})));

        let report = run_probe(&probe).await;

        assert!(report.is_success());
        assert_eq!(report.service, ServiceKind::Qdrant);
        assert!(report.console_text().unwrap().contains("\"name\":\"docs\""));
    }

    #[tokio::test]
    async fn test_run_probe_error_becomes_message() {
        let mut probe = MockHealthProbe::new();
        probe.expect_service().return_const(ServiceKind::Elasticsearch);
        probe.expect_probe().times(1).returning(|| {
            Err(ProbeError::Status {
                status: reqwest::StatusCode::UNAUTHORIZED,
                body: "missing authentication credentials".to_string(),
            })
        });

        let report = run_probe(&probe).await;

        assert!(!report.is_success());
        let text = report.console_text().unwrap();
        assert!(text.starts_with("Elasticsearch connection failed: HTTP 401 Unauthorized"));
        assert!(text.contains("missing authentication credentials"));
    }

    #[tokio::test]
    async fn test_run_probe_unexpected_status_has_no_message() {
        let mut probe = MockHealthProbe::new();
        probe.expect_service().return_const(ServiceKind::Ollama);
        probe
            .expect_probe()
            .times(1)
            .returning(|| Err(ProbeError::UnexpectedStatus(reqwest::StatusCode::SERVICE_UNAVAILABLE)));

        let report = run_probe(&probe).await;

        assert_eq!(report.outcome, ProbeOutcome::Unreachable(None));
        assert!(report.console_text().is_none());
    }
}

//! Elasticsearch client limited to cluster health

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use shared::{ElasticsearchConfig, ServiceKind};
use crate::error::{CheckerError, CheckerResult, ProbeError};
use crate::services::{endpoint_url, json_body};
use crate::traits::HealthProbe;

const CLUSTER_HEALTH_PATH: &str = "/_cluster/health";

/// Search service client authenticated with an API key
pub struct ElasticsearchClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ElasticsearchClient {
    /// Create a client bound to the configured cluster
    ///
    /// Certificate verification follows `config.verify_certs`.
    pub fn new(config: &ElasticsearchConfig) -> CheckerResult<Self> {
        let mut auth = HeaderValue::from_str(&format!("ApiKey {}", config.api_key)).map_err(|e| {
            CheckerError::ClientBuild {
                service: ServiceKind::Elasticsearch,
                message: format!("invalid API key: {}", e),
            }
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        if !config.verify_certs {
            warn!("Elasticsearch client accepts invalid certificates (development only)");
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .danger_accept_invalid_certs(!config.verify_certs)
            .build()
            .map_err(|e| CheckerError::ClientBuild {
                service: ServiceKind::Elasticsearch,
                message: e.to_string(),
            })?;

        Ok(Self { client, base_url: config.url.clone() })
    }

    /// Fetch the cluster health document
    pub async fn cluster_health(&self) -> Result<Value, ProbeError> {
        let url = endpoint_url(&self.base_url, CLUSTER_HEALTH_PATH);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        json_body(response).await
    }
}

#[async_trait]
impl HealthProbe for ElasticsearchClient {
    fn service(&self) -> ServiceKind {
        ServiceKind::Elasticsearch
    }

    async fn probe(&self) -> Result<Value, ProbeError> {
        self.cluster_health().await
    }
}

//! Qdrant client limited to listing collections

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use shared::{QdrantConfig, ServiceKind};
use crate::error::{CheckerError, CheckerResult, ProbeError};
use crate::services::{endpoint_url, json_body};
use crate::traits::HealthProbe;

const COLLECTIONS_PATH: &str = "/collections";
const API_KEY_HEADER: &str = "api-key";

/// Envelope every Qdrant REST response is wrapped in
#[derive(Debug, Deserialize)]
struct QdrantResponse {
    result: Value,
}

/// Vector database client authenticated with an API key
pub struct QdrantClient {
    client: reqwest::Client,
    base_url: Url,
}

impl QdrantClient {
    pub fn new(config: &QdrantConfig) -> CheckerResult<Self> {
        let mut api_key = HeaderValue::from_str(&config.api_key).map_err(|e| CheckerError::ClientBuild {
            service: ServiceKind::Qdrant,
            message: format!("invalid API key: {}", e),
        })?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| CheckerError::ClientBuild {
                service: ServiceKind::Qdrant,
                message: e.to_string(),
            })?;

        Ok(Self { client, base_url: config.url.clone() })
    }

    /// List existing collections, returning the `result` member of the response
    pub async fn get_collections(&self) -> Result<Value, ProbeError> {
        let url = endpoint_url(&self.base_url, COLLECTIONS_PATH);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let body = json_body(response).await?;
        let envelope: QdrantResponse =
            serde_json::from_value(body).map_err(|e| ProbeError::Decode(e.to_string()))?;
        Ok(envelope.result)
    }
}

#[async_trait]
impl HealthProbe for QdrantClient {
    fn service(&self) -> ServiceKind {
        ServiceKind::Qdrant
    }

    async fn probe(&self) -> Result<Value, ProbeError> {
        self.get_collections().await
    }
}

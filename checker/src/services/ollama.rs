//! Plain HTTP check against a local Ollama server

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;
use url::Url;

use shared::{OllamaConfig, ServiceKind};
use crate::error::{CheckerError, CheckerResult, ProbeError};
use crate::services::{decode_json, endpoint_url};
use crate::traits::HealthProbe;

/// Model listing endpoint used as the health check
pub const TAGS_PATH: &str = "/api/tags";

/// Holds only the server address; every probe is a bare GET
pub struct OllamaClient {
    client: reqwest::Client,
    base_url: Url,
}

impl OllamaClient {
    pub fn new(config: &OllamaConfig) -> CheckerResult<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| CheckerError::ClientBuild {
                service: ServiceKind::Ollama,
                message: e.to_string(),
            })?;

        Ok(Self { client, base_url: config.url.clone() })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// List locally available models
    ///
    /// Only `200 OK` counts; any other status is an [`ProbeError::UnexpectedStatus`].
    pub async fn list_models(&self) -> Result<Value, ProbeError> {
        let url = endpoint_url(&self.base_url, TAGS_PATH);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(ProbeError::UnexpectedStatus(status));
        }

        let body = response.text().await?;
        decode_json(&body)
    }
}

#[async_trait]
impl HealthProbe for OllamaClient {
    fn service(&self) -> ServiceKind {
        ServiceKind::Ollama
    }

    async fn probe(&self) -> Result<Value, ProbeError> {
        self.list_models().await
    }
}

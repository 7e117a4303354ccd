//! Twilio REST client limited to fetching the account record

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use url::Url;

use shared::{ServiceKind, TwilioConfig};
use crate::error::{CheckerError, CheckerResult, ProbeError};
use crate::services::{endpoint_url, json_body};
use crate::traits::HealthProbe;

const API_VERSION: &str = "2010-04-01";

/// Fields of the account resource shown on success
#[derive(Debug, Serialize, Deserialize)]
pub struct TwilioAccount {
    pub sid: String,
    #[serde(default)]
    pub friendly_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Messaging service client using basic auth with the account SID and token
pub struct TwilioClient {
    client: reqwest::Client,
    api_url: Url,
    account_sid: String,
    auth_token: String,
}

impl TwilioClient {
    pub fn new(config: &TwilioConfig) -> CheckerResult<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| CheckerError::ClientBuild {
                service: ServiceKind::Twilio,
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            account_sid: config.account_sid.clone(),
            auth_token: config.auth_token.clone(),
        })
    }

    pub fn account_sid(&self) -> &str {
        &self.account_sid
    }

    /// Fetch the account the credentials belong to
    pub async fn fetch_account(&self) -> Result<TwilioAccount, ProbeError> {
        let path = format!("/{}/Accounts/{}.json", API_VERSION, self.account_sid);
        let url = endpoint_url(&self.api_url, &path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .send()
            .await?;
        let body = json_body(response).await?;
        serde_json::from_value(body).map_err(|e| ProbeError::Decode(e.to_string()))
    }
}

#[async_trait]
impl HealthProbe for TwilioClient {
    fn service(&self) -> ServiceKind {
        ServiceKind::Twilio
    }

    async fn probe(&self) -> Result<Value, ProbeError> {
        let account = self.fetch_account().await?;
        serde_json::to_value(account).map_err(|e| ProbeError::Decode(e.to_string()))
    }
}

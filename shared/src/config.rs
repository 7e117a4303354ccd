//! Service configuration loading
//!
//! Connection settings for every probed service are read once at startup.
//!
//! ## Configuration Sources
//! Values are loaded from:
//! 1. a `.env` file in the current directory or parent directories (or an
//!    explicit file given on the command line)
//! 2. system environment variables
//!
//! Environment variables take precedence over `.env` file values.
//!
//! ## Required Keys
//! - `ELASTICSEARCH_URL`, `ELASTICSEARCH_API_KEY`
//! - `QDRANT_URL`, `QDRANT_API_KEY`
//! - `TWILIO_ACCOUNT_SID`, `TWILIO_AUTH_TOKEN`
//!
//! ## Optional Keys
//! - `ELASTICSEARCH_VERIFY_CERTS`: `true`/`1` turns certificate checks on
//! - `TWILIO_API_URL`: defaults to [`DEFAULT_TWILIO_API_URL`]
//! - `OLLAMA_URL`: defaults to [`DEFAULT_OLLAMA_URL`]

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use url::Url;

use crate::errors::{SharedError, SharedResult};

pub const ELASTICSEARCH_URL: &str = "ELASTICSEARCH_URL";
pub const ELASTICSEARCH_API_KEY: &str = "ELASTICSEARCH_API_KEY";
pub const ELASTICSEARCH_VERIFY_CERTS: &str = "ELASTICSEARCH_VERIFY_CERTS";
pub const QDRANT_URL: &str = "QDRANT_URL";
pub const QDRANT_API_KEY: &str = "QDRANT_API_KEY";
pub const TWILIO_ACCOUNT_SID: &str = "TWILIO_ACCOUNT_SID";
pub const TWILIO_AUTH_TOKEN: &str = "TWILIO_AUTH_TOKEN";
pub const TWILIO_API_URL: &str = "TWILIO_API_URL";
pub const OLLAMA_URL: &str = "OLLAMA_URL";

/// Local model server address used when `OLLAMA_URL` is not set
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Public Twilio REST API root
pub const DEFAULT_TWILIO_API_URL: &str = "https://api.twilio.com";

/// Where configuration values come from
pub trait ConfigSource {
    /// Look up a single value, `None` when unset
    fn get(&self, key: &str) -> Option<String>;
}

/// Process environment, optionally seeded from a dotenv file
pub struct EnvConfigSource {
    env_file: Option<PathBuf>,
}

impl EnvConfigSource {
    /// Search for `.env` in the current directory and its parents
    ///
    /// A missing file is fine; values then come from the real environment only.
    pub fn new() -> Self {
        match dotenv::dotenv() {
            Ok(path) => {
                debug!("Loaded environment from {}", path.display());
                Self { env_file: Some(path) }
            }
            Err(_) => Self { env_file: None },
        }
    }

    /// Load an explicit dotenv file, failing if it cannot be read
    pub fn from_file(path: &Path) -> SharedResult<Self> {
        dotenv::from_path(path).map_err(|e| SharedError::EnvFile {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        debug!("Loaded environment from {}", path.display());
        Ok(Self { env_file: Some(path.to_path_buf()) })
    }

    /// The dotenv file that was loaded, if any
    pub fn env_file(&self) -> Option<&Path> {
        self.env_file.as_deref()
    }
}

impl Default for EnvConfigSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigSource for EnvConfigSource {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl ConfigSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// Search service connection settings
#[derive(Clone, Debug)]
pub struct ElasticsearchConfig {
    pub url: Url,
    pub api_key: String,
    pub verify_certs: bool,
}

/// Vector database connection settings
#[derive(Clone, Debug)]
pub struct QdrantConfig {
    pub url: Url,
    pub api_key: String,
}

/// Messaging service credentials
#[derive(Clone, Debug)]
pub struct TwilioConfig {
    pub api_url: Url,
    pub account_sid: String,
    pub auth_token: String,
}

/// Local model server settings
#[derive(Clone, Debug)]
pub struct OllamaConfig {
    pub url: Url,
}

/// Complete, validated configuration for one checker run
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub elasticsearch: ElasticsearchConfig,
    pub qdrant: QdrantConfig,
    pub twilio: TwilioConfig,
    pub ollama: OllamaConfig,
}

impl ServiceConfig {
    /// Read and validate every value from `source`
    ///
    /// All missing required keys are reported together.
    pub fn load(source: &dyn ConfigSource) -> SharedResult<Self> {
        let required = [
            ELASTICSEARCH_URL,
            ELASTICSEARCH_API_KEY,
            QDRANT_URL,
            QDRANT_API_KEY,
            TWILIO_ACCOUNT_SID,
            TWILIO_AUTH_TOKEN,
        ];

        let missing: Vec<&str> = required
            .iter()
            .copied()
            .filter(|key| non_empty(source, key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(SharedError::MissingConfig { key: missing.join(", ") });
        }

        let verify_certs = match non_empty(source, ELASTICSEARCH_VERIFY_CERTS) {
            Some(value) => parse_bool(ELASTICSEARCH_VERIFY_CERTS, &value)?,
            None => false,
        };
        if !verify_certs {
            warn!("Elasticsearch certificate verification is disabled");
        }

        Ok(Self {
            elasticsearch: ElasticsearchConfig {
                url: required_url(source, ELASTICSEARCH_URL)?,
                api_key: required_value(source, ELASTICSEARCH_API_KEY)?,
                verify_certs,
            },
            qdrant: QdrantConfig {
                url: required_url(source, QDRANT_URL)?,
                api_key: required_value(source, QDRANT_API_KEY)?,
            },
            twilio: TwilioConfig {
                api_url: optional_url(source, TWILIO_API_URL, DEFAULT_TWILIO_API_URL)?,
                account_sid: required_value(source, TWILIO_ACCOUNT_SID)?,
                auth_token: required_value(source, TWILIO_AUTH_TOKEN)?,
            },
            ollama: OllamaConfig {
                url: optional_url(source, OLLAMA_URL, DEFAULT_OLLAMA_URL)?,
            },
        })
    }

    /// Load from the process environment, seeded from `env_file` or a discovered `.env`
    pub fn from_env(env_file: Option<&Path>) -> SharedResult<Self> {
        let source = match env_file {
            Some(path) => EnvConfigSource::from_file(path)?,
            None => EnvConfigSource::new(),
        };
        Self::load(&source)
    }

    /// Replace the model server address
    pub fn with_ollama_url(mut self, url: &str) -> SharedResult<Self> {
        self.ollama.url = parse_url(OLLAMA_URL, url)?;
        Ok(self)
    }
}

fn non_empty(source: &dyn ConfigSource, key: &str) -> Option<String> {
    source
        .get(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn required_value(source: &dyn ConfigSource, key: &str) -> SharedResult<String> {
    non_empty(source, key).ok_or_else(|| SharedError::MissingConfig { key: key.to_string() })
}

fn required_url(source: &dyn ConfigSource, key: &str) -> SharedResult<Url> {
    let value = required_value(source, key)?;
    parse_url(key, &value)
}

fn optional_url(source: &dyn ConfigSource, key: &str, default: &str) -> SharedResult<Url> {
    let value = non_empty(source, key).unwrap_or_else(|| default.to_string());
    parse_url(key, &value)
}

fn parse_url(field: &str, value: &str) -> SharedResult<Url> {
    let url = Url::parse(value).map_err(|source| SharedError::InvalidUrl {
        field: field.to_string(),
        value: value.to_string(),
        source,
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(SharedError::InvalidConfig {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(url)
}

fn parse_bool(field: &str, value: &str) -> SharedResult<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(SharedError::InvalidConfig {
            field: field.to_string(),
            value: value.to_string(),
        }),
    }
}

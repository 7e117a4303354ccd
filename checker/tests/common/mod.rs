//! Fixtures shared by the checker integration tests

use std::collections::HashMap;

use shared::config::*;
use shared::ServiceConfig;
use wiremock::MockServer;

/// Address nothing listens on, so connecting is refused
pub fn refused_address() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

/// Configuration values pointing every service at the given base URLs
pub fn config_values(es: &str, qdrant: &str, ollama: &str, twilio: &str) -> HashMap<String, String> {
    let mut values = HashMap::new();
    values.insert(ELASTICSEARCH_URL.to_string(), es.to_string());
    values.insert(ELASTICSEARCH_API_KEY.to_string(), "es-key".to_string());
    values.insert(QDRANT_URL.to_string(), qdrant.to_string());
    values.insert(QDRANT_API_KEY.to_string(), "qdrant-key".to_string());
    values.insert(TWILIO_ACCOUNT_SID.to_string(), "ACtest".to_string());
    values.insert(TWILIO_AUTH_TOKEN.to_string(), "secret".to_string());
    values.insert(TWILIO_API_URL.to_string(), twilio.to_string());
    values.insert(OLLAMA_URL.to_string(), ollama.to_string());
    values
}

/// Configuration with every service served by `server`
pub fn config_for(server: &MockServer) -> ServiceConfig {
    let uri = server.uri();
    ServiceConfig::load(&config_values(&uri, &uri, &uri, &uri)).unwrap()
}

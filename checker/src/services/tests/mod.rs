//! Tests for the service clients against simulated HTTP backends


use url::Url;
use wiremock::MockServer;

use crate::error::ProbeError;
use crate::services::{decode_json, endpoint_url};

/// Base URL of a running mock server
pub fn server_url(server: &MockServer) -> Url {
    Url::parse(&server.uri()).unwrap()
}

/// Address nothing listens on, so connecting is refused
pub fn refused_url() -> Url {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    Url::parse(&format!("http://127.0.0.1:{}", port)).unwrap()
}

#[test]
fn test_endpoint_url_keeps_prefix() {
    let base = Url::parse("https://proxy.local/es").unwrap();
    assert_eq!(endpoint_url(&base, "/_cluster/health"), "https://proxy.local/es/_cluster/health");

    let base = Url::parse("http://localhost:11434").unwrap();
    assert_eq!(endpoint_url(&base, "api/tags"), "http://localhost:11434/api/tags");
}

#[test]
fn test_decode_json_rejects_garbage() {
    assert!(matches!(decode_json("<html>"), Err(ProbeError::Decode(_))));
    assert_eq!(decode_json("[1,2]").unwrap(), serde_json::json!([1, 2]));
}

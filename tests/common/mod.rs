//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Once;

use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cloudconnexa::{ClientConfig, CloudConnexaClient};

static INIT: Once = Once::new();

/// Initialize logging for tests
pub fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Mount a token endpoint that hands out `tok`.
pub async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/v1/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok",
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .mount(server)
        .await;
}

/// Test configuration: loopback HTTP allowed, generous rate limits.
pub fn test_config() -> ClientConfig {
    ClientConfig::default().with_insecure_loopback(true)
}

/// Authenticate against the mock server with `config`.
pub async fn client_with(server: &MockServer, config: ClientConfig) -> CloudConnexaClient {
    init_logging();
    mount_token(server).await;
    CloudConnexaClient::with_config(&server.uri(), "client-id", "client-secret", config)
        .await
        .expect("bootstrap against mock server")
}

/// Authenticate against the mock server with [`test_config`].
pub async fn client(server: &MockServer) -> CloudConnexaClient {
    client_with(server, test_config()).await
}

/// Build a page in the API's collection shape.
pub fn page(content: Vec<Value>, page: u32, size: u32, total_elements: u64) -> Value {
    let total_pages = total_elements.div_ceil(u64::from(size)) as u32;
    let number_of_elements = content.len();
    json!({
        "content": content,
        "page": page,
        "size": size,
        "numberOfElements": number_of_elements,
        "totalElements": total_elements,
        "totalPages": total_pages,
        "success": true
    })
}

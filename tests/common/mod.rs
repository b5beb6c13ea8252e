// Common test utilities shared across test files

use axum::{body::Body, http::Response};
use http_body_util::BodyExt;
use linkforge::{
    config::{LinkCatalog, LinkSettings},
    AppState,
};

fn link(rel: &str, template: &str, composite: Option<bool>) -> LinkSettings {
    LinkSettings {
        rel: rel.to_string(),
        description: format!("{} link", rel),
        template: template.to_string(),
        composite,
    }
}

/// Catalog used by the HTTP tests
#[allow(dead_code)]
pub fn test_catalog() -> LinkCatalog {
    LinkCatalog::from_settings(vec![
        link("user", "/users/{userId}", None),
        link("user-activity", "/users/{userId}/activity{?limit,page}", None),
        link("user-search", "/users{?keyWords*,limit}", None),
        link("user-search-composite", "/users{?keyWords*,limit}", Some(true)),
    ])
    .expect("Failed to build test catalog")
}

/// Create a test Axum router for integration tests
#[allow(dead_code)]
pub fn create_test_app() -> axum::Router {
    linkforge::create_router(AppState::new(test_catalog()))
}

/// Read a response body as JSON
#[allow(dead_code)]
pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}

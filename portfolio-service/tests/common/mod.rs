#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use portfolio_service::config::PortfolioConfig;
use portfolio_service::services::providers::mock::MockChatProvider;
use portfolio_service::services::{Catalog, ChatRelay};
use portfolio_service::startup::{build_router, AppState, Application};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;

/// State with the seeded catalog, a random port and the given relay.
pub fn test_state(chat: ChatRelay) -> AppState {
    let mut config = PortfolioConfig::default();
    config.common.port = 0; // Random port for testing

    AppState {
        config,
        catalog: Arc::new(Catalog::seeded()),
        chat,
    }
}

/// Router whose chat relay answers through `provider`.
pub fn router_with_provider(provider: Arc<MockChatProvider>) -> Router {
    build_router(test_state(ChatRelay::new(provider)))
}

/// Router with no chat credential configured.
pub fn router_without_credential() -> Router {
    build_router(test_state(ChatRelay::unconfigured()))
}

pub async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    send(
        router,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn post_json(router: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    let body = serde_json::from_slice(&bytes).expect("Response body is not JSON");
    (status, body)
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    /// Spawn the real server on a random port.
    pub async fn spawn(state: AppState) -> Self {
        let app = Application::build_with_state(state)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, port }
    }
}

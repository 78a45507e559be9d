mod common;

use common::{test_state, TestApp};
use portfolio_service::services::ChatRelay;
use reqwest::Client;

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn(test_state(ChatRelay::unconfigured())).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "portfolio-service");
}

#[tokio::test]
async fn api_liveness_over_the_wire() {
    let app = TestApp::spawn(test_state(ChatRelay::unconfigured())).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api?foo=bar", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    assert!(response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json")));

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body,
        serde_json::json!({ "status": "ok", "message": "Portfolio API is running" })
    );
}

#[tokio::test]
async fn metrics_endpoint_returns_text() {
    let app = TestApp::spawn(test_state(ChatRelay::unconfigured())).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/metrics", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let content_type = response
        .headers()
        .get("content-type")
        .expect("Missing content-type header")
        .to_str()
        .expect("Invalid content-type");

    assert!(content_type.starts_with("text/plain"));
}

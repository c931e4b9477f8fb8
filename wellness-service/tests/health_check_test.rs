mod common;

use common::{sample_candidates, sample_plan, TestApp};
use reqwest::Client;
use std::sync::Arc;
use wellness_service::services::providers::{
    MockEmbeddingProvider, MockFoodIndex, MockPlanProvider,
};

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn(
        Arc::new(MockEmbeddingProvider::new(8)),
        Arc::new(MockFoodIndex::with_candidates(sample_candidates())),
        Arc::new(MockPlanProvider::returning(sample_plan())),
    )
    .await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "wellness-service");
}

#[tokio::test]
async fn readiness_check_works() {
    let app = TestApp::spawn(
        Arc::new(MockEmbeddingProvider::new(8)),
        Arc::new(MockFoodIndex::with_candidates(sample_candidates())),
        Arc::new(MockPlanProvider::returning(sample_plan())),
    )
    .await;
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
}

#[tokio::test]
async fn metrics_endpoint_responds() {
    let app = TestApp::spawn(
        Arc::new(MockEmbeddingProvider::new(8)),
        Arc::new(MockFoodIndex::with_candidates(sample_candidates())),
        Arc::new(MockPlanProvider::returning(sample_plan())),
    )
    .await;
    let client = Client::new();

    let response = client
        .get(format!("{}/metrics", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
}

//! Health endpoint tests

use axum::http::StatusCode;

use crate::common::{json_body, InMemoryStore, TestApp};

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new(InMemoryStore::default());
    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_liveness() {
    let app = TestApp::new(InMemoryStore::default());
    let response = app.get("/health/live").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "alive");
}

#[tokio::test]
async fn test_readiness_reports_unreachable_database() {
    let app = TestApp::new(InMemoryStore::default());
    let response = app.get("/health/ready").await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = json_body(response).await;
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["database"]["status"], "unhealthy");
    assert_eq!(body["registered_resource_types"], 7);
}

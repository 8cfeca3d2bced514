//! File retrieval and health integration tests.
//!
//! Run with: `cargo test -p notary-api --test files_test`

mod helpers;

use helpers::setup_test_app;
use serde_json::Value;

#[tokio::test]
async fn test_get_missing_uploaded_file_returns_404() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client.get("/file/nonexistent.png").await;
    assert_eq!(response.status_code(), 404);

    let body: Value = response.json();
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_get_missing_generated_file_returns_404() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client.get("/generated/nonexistent.txt").await;
    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn test_health_reports_storage_status() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client.get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["uploads"], "healthy");
    assert_eq!(body["generated"], "healthy");
}

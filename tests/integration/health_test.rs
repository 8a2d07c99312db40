// Service metadata and health endpoints

use super::test_harness::TestServer;

#[tokio::test]
async fn test_root_reports_service_info() {
    let server = TestServer::start(&[]).await;

    let response = server.client.get(server.url("/")).send().await.unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["service"], "Image Overlay Service");
    assert_eq!(body["status"], "running");
}

#[tokio::test]
async fn test_health_reports_healthy() {
    let server = TestServer::start(&[]).await;

    let response = server.client.get(server.url("/health")).send().await.unwrap();
    assert_eq!(response.status(), 200);
    assert!(response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .starts_with("application/json"));

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime_seconds"].is_u64());
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let server = TestServer::start(&[]).await;

    let response = server.client.get(server.url("/nope")).send().await.unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_overlay_requires_post() {
    let server = TestServer::start(&[]).await;

    let response = server.client.get(server.url("/overlay")).send().await.unwrap();
    assert_eq!(response.status(), 405);
}

use std::net::SocketAddr;
use std::sync::Arc;

use super::*;
use crate::state::test_helpers::{MockSink, test_app_state_with_sink, test_settings};

/// Serve `app` on an ephemeral port and return its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router.into_make_service_with_connect_info::<SocketAddr>()).await.unwrap();
    });
    format!("http://{addr}")
}

fn state() -> AppState {
    test_app_state_with_sink(test_settings(&[]), Arc::new(MockSink::default()))
}

#[tokio::test]
async fn api_app_answers_info_and_health() {
    let base = serve(app(state())).await;
    let http = reqwest::Client::new();

    let info: serde_json::Value = http.get(format!("{base}/")).send().await.unwrap().json().await.unwrap();
    assert_eq!(info["status"], "operational");

    let health = http.get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(health.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn contact_route_accepts_json() {
    let base = serve(app(state())).await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/api/contact"))
        .json(&serde_json::json!({
            "name": "Jane Smith",
            "email": "jane@example.com",
            "subject": "Project Inquiry",
            "message": "I would like to discuss a project with you.",
            "rating": 4,
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(resp.headers()["x-ratelimit-remaining"], "2");
}

#[tokio::test]
async fn cors_allows_configured_origin_only() {
    let base = serve(app(state())).await;
    let http = reqwest::Client::new();

    let allowed = http.get(format!("{base}/health")).header("origin", "http://localhost:5173").send().await.unwrap();
    assert_eq!(allowed.headers()["access-control-allow-origin"], "http://localhost:5173");

    let denied = http.get(format!("{base}/health")).header("origin", "https://evil.example").send().await.unwrap();
    assert!(denied.headers().get("access-control-allow-origin").is_none());
}

#[test]
fn wildcard_origin_builds() {
    let _layer = cors_layer(&AllowedOrigins::Any);
}

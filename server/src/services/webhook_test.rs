use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;

use super::*;
use crate::services::signature::verify_signature;

const SECRET: &str = "test-secret";

#[derive(Default)]
struct Receiver {
    hits: AtomicU32,
    /// Number of leading requests answered with 500.
    fail_first: u32,
    seen: Mutex<Vec<(Option<String>, serde_json::Value)>>,
}

async fn receive(State(rx): State<Arc<Receiver>>, headers: HeaderMap, body: String) -> StatusCode {
    let hit = rx.hits.fetch_add(1, Ordering::SeqCst) + 1;
    let signature = headers.get(SIGNATURE_HEADER).and_then(|v| v.to_str().ok()).map(str::to_owned);
    let json = serde_json::from_str(&body).unwrap_or(serde_json::Value::Null);
    rx.seen.lock().unwrap().push((signature, json));
    if hit <= rx.fail_first { StatusCode::INTERNAL_SERVER_ERROR } else { StatusCode::OK }
}

async fn spawn_receiver(rx: Arc<Receiver>) -> String {
    let app = Router::new().route("/hook", post(receive)).with_state(rx);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/hook")
}

fn settings(secret: &str, max_retries: u32) -> WebhookSettings {
    WebhookSettings { url: None, timeout: Duration::from_secs(2), secret: secret.into(), max_retries }
}

fn client(url: &str, secret: &str, max_retries: u32) -> WebhookClient {
    WebhookClient::new(url, &settings(secret, max_retries), "1.0.0").unwrap().with_backoff(Duration::ZERO)
}

fn submission() -> ContactSubmission {
    ContactSubmission {
        name: "Jane Smith".into(),
        email: "jane@example.com".into(),
        subject: "Project Inquiry".into(),
        message: "I would like to discuss a project.".into(),
        rating: 4,
    }
}

// =============================================================================
// PAYLOAD
// =============================================================================

#[test]
fn contact_payload_has_envelope_fields() {
    let value = contact_payload(&submission(), "req_abc", "1.2.3", "2026-01-01T00:00:00Z".into()).unwrap();
    assert_eq!(value["request_id"], "req_abc");
    assert_eq!(value["timestamp"], "2026-01-01T00:00:00Z");
    assert_eq!(value["form_data"]["email"], "jane@example.com");
    assert_eq!(value["form_data"]["rating"], 4);
    assert_eq!(value["metadata"]["source"], PAYLOAD_SOURCE);
    assert_eq!(value["metadata"]["version"], "1.2.3");
}

#[test]
fn now_rfc3339_parses_back() {
    let stamp = now_rfc3339();
    assert!(OffsetDateTime::parse(&stamp, &Rfc3339).is_ok(), "{stamp}");
}

#[test]
fn retryable_only_for_transient_failures() {
    assert!(WebhookError::Network { attempts: 1, message: "reset".into() }.retryable());
    assert!(WebhookError::Status { status: 503, attempts: 3 }.retryable());
    assert!(!WebhookError::Status { status: 404, attempts: 3 }.retryable());
    assert_eq!(WebhookError::Encode("x".into()).error_code(), "WEBHOOK_ERROR");
}

#[test]
fn ping_outcome_health() {
    let ok = PingOutcome { status: Some(204), elapsed: Duration::ZERO, error: None };
    let bad = PingOutcome { status: Some(500), elapsed: Duration::ZERO, error: None };
    let down = PingOutcome { status: None, elapsed: Duration::ZERO, error: Some("x".into()) };
    assert!(ok.healthy());
    assert!(!bad.healthy());
    assert!(!down.healthy());
}

// =============================================================================
// DELIVERY
// =============================================================================

#[tokio::test]
async fn deliver_signs_payload_when_secret_set() {
    let rx = Arc::new(Receiver::default());
    let url = spawn_receiver(rx.clone()).await;

    let delivery = client(&url, SECRET, 3).deliver(&submission(), "req_signed").await.unwrap();
    assert_eq!(delivery, Delivery { status: 200, attempts: 1 });

    let seen = rx.seen.lock().unwrap();
    let (signature, body) = &seen[0];
    let signature = signature.as_deref().expect("signature header");
    assert!(verify_signature(body, signature, SECRET));
    assert_eq!(body["request_id"], "req_signed");
}

#[tokio::test]
async fn deliver_omits_signature_without_secret() {
    let rx = Arc::new(Receiver::default());
    let url = spawn_receiver(rx.clone()).await;

    client(&url, "", 1).deliver(&submission(), "req_plain").await.unwrap();
    assert_eq!(rx.seen.lock().unwrap()[0].0, None);
}

#[tokio::test]
async fn deliver_retries_until_success() {
    let rx = Arc::new(Receiver { fail_first: 2, ..Receiver::default() });
    let url = spawn_receiver(rx.clone()).await;

    let delivery = client(&url, SECRET, 3).deliver(&submission(), "req_retry").await.unwrap();
    assert_eq!(delivery.attempts, 3);
    assert_eq!(rx.hits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn deliver_gives_up_after_max_retries() {
    let rx = Arc::new(Receiver { fail_first: u32::MAX, ..Receiver::default() });
    let url = spawn_receiver(rx.clone()).await;

    let err = client(&url, SECRET, 2).deliver(&submission(), "req_fail").await.unwrap_err();
    assert!(matches!(err, WebhookError::Status { status: 500, attempts: 2 }), "{err:?}");
    assert_eq!(rx.hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn deliver_reports_network_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{addr}/hook"), "", 2).deliver(&submission(), "req_down").await.unwrap_err();
    assert!(matches!(err, WebhookError::Network { attempts: 2, .. }), "{err:?}");
}

// =============================================================================
// PING
// =============================================================================

#[tokio::test]
async fn ping_sends_test_payload() {
    let rx = Arc::new(Receiver::default());
    let url = spawn_receiver(rx.clone()).await;

    let outcome = client(&url, SECRET, 3).ping().await;
    assert!(outcome.healthy());
    assert_eq!(outcome.error, None);

    let seen = rx.seen.lock().unwrap();
    let (signature, body) = &seen[0];
    assert_eq!(body["test"], true);
    assert_eq!(body["request_id"].as_str().map(str::len), Some(32));
    assert!(verify_signature(body, signature.as_deref().unwrap(), SECRET));
}

#[tokio::test]
async fn ping_unreachable_reports_connection_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let outcome = client(&format!("http://{addr}/hook"), "", 1).ping().await;
    assert_eq!(outcome.status, None);
    assert!(outcome.error.unwrap().starts_with("Connection failed"));
}

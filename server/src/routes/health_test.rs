use std::sync::Arc;

use super::*;
use crate::state::test_helpers::{MockSink, test_app_state, test_app_state_with_sink, test_settings};

#[tokio::test]
async fn api_info_hides_docs_outside_development() {
    let Json(info) = api_info(State(test_app_state())).await;
    assert_eq!(info.name, "Portfolio Contact API");
    assert_eq!(info.status, "operational");
    assert_eq!(info.docs, "Contact the administrator");
}

#[tokio::test]
async fn api_info_points_to_docs_in_development() {
    let state = crate::state::AppState::new(
        test_settings(&[("ENVIRONMENT", "development")]),
        crate::services::validation::Sanitizer::new().unwrap(),
        None,
    );
    let Json(info) = api_info(State(state)).await;
    assert_eq!(info.docs, "/docs");
}

#[tokio::test]
async fn health_reports_webhook_configuration() {
    let Json(bare) = health(State(test_app_state())).await;
    assert_eq!(bare.status, "healthy");
    assert!(!bare.webhook_configured);

    let sink = Arc::new(MockSink::default());
    let Json(wired) = health(State(test_app_state_with_sink(test_settings(&[]), sink))).await;
    assert!(wired.webhook_configured);
}

#[tokio::test]
async fn webhook_health_without_sink_is_unhealthy() {
    let Json(report) = webhook_health(State(test_app_state())).await;
    assert!(!report.healthy);
    assert_eq!(report.status_code, 0);
    assert_eq!(report.error.as_deref(), Some("Webhook URL is not configured"));
}

#[tokio::test]
async fn webhook_health_reports_ping() {
    let sink = Arc::new(MockSink { ping_status: Some(200), ..MockSink::default() });
    let state = test_app_state_with_sink(test_settings(&[("WEBHOOK_SECRET", "s3cret")]), sink);
    let Json(report) = webhook_health(State(state)).await;

    assert!(report.healthy);
    assert_eq!(report.status_code, 200);
    assert_eq!(report.response_time_ms, 12);
    assert!(report.details.signature_enabled);
    assert_eq!(report.error, None);
}

#[tokio::test]
async fn webhook_health_reports_timeout() {
    let sink = Arc::new(MockSink::default());
    let Json(report) = webhook_health(State(test_app_state_with_sink(test_settings(&[]), sink))).await;
    assert!(!report.healthy);
    assert_eq!(report.error.as_deref(), Some("Timeout connecting to webhook"));
}

#[tokio::test]
async fn webhook_config_summarizes_settings() {
    let settings = test_settings(&[("WEBHOOK_MAX_RETRIES", "5"), ("WEBHOOK_TIMEOUT_SECS", "4")]);
    let state = crate::state::AppState::new(settings, crate::services::validation::Sanitizer::new().unwrap(), None);
    let Json(summary) = webhook_config(State(state)).await;

    assert!(!summary.webhook_configured);
    assert!(!summary.signature_enabled);
    assert_eq!(summary.max_retries, 5);
    assert_eq!(summary.timeout_seconds, 4);
    assert_eq!(summary.rate_limit_per_hour, 3);
}

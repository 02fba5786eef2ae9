//! Service info, liveness, and webhook diagnostics.

use axum::Json;
use axum::extract::State;

use crate::models::{ApiInfo, HealthResponse, WebhookConfigSummary, WebhookHealth, WebhookHealthDetails};
use crate::services::webhook::now_rfc3339;
use crate::state::AppState;

/// `GET /` (or `/api` when the SSR app owns `/`).
pub async fn api_info(State(state): State<AppState>) -> Json<ApiInfo> {
    let settings = &state.settings;
    let docs = if settings.is_development() { "/docs" } else { "Contact the administrator" };
    Json(ApiInfo {
        name: settings.api_title.clone(),
        version: settings.api_version.clone(),
        status: "operational".to_owned(),
        docs: docs.to_owned(),
    })
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_owned(),
        version: state.settings.api_version.clone(),
        environment: state.settings.environment.clone(),
        webhook_configured: state.webhook_configured(),
    })
}

/// `GET /webhook/health`: ping the configured webhook once.
pub async fn webhook_health(State(state): State<AppState>) -> Json<WebhookHealth> {
    let settings = &state.settings;
    let details = WebhookHealthDetails {
        signature_enabled: settings.webhook.signature_enabled(),
        timeout_seconds: settings.webhook.timeout.as_secs(),
        environment: settings.environment.clone(),
    };

    let Some(sink) = state.sink.as_ref() else {
        return Json(WebhookHealth {
            healthy: false,
            status_code: 0,
            response_time_ms: 0,
            timestamp: now_rfc3339(),
            details,
            error: Some("Webhook URL is not configured".to_owned()),
        });
    };

    let outcome = sink.ping().await;
    tracing::info!(status = ?outcome.status, elapsed_ms = outcome.elapsed.as_millis(), "webhook health check");
    Json(WebhookHealth {
        healthy: outcome.healthy(),
        status_code: outcome.status.unwrap_or(0),
        response_time_ms: u64::try_from(outcome.elapsed.as_millis()).unwrap_or(u64::MAX),
        timestamp: now_rfc3339(),
        details,
        error: outcome.error,
    })
}

/// `GET /webhook/config`: non-sensitive delivery settings.
pub async fn webhook_config(State(state): State<AppState>) -> Json<WebhookConfigSummary> {
    let settings = &state.settings;
    Json(WebhookConfigSummary {
        webhook_configured: state.webhook_configured(),
        signature_enabled: settings.webhook.signature_enabled(),
        timeout_seconds: settings.webhook.timeout.as_secs(),
        max_retries: settings.webhook.max_retries,
        rate_limit_per_hour: settings.rate_limit_per_hour,
        environment: settings.environment.clone(),
        api_version: settings.api_version.clone(),
    })
}

#[cfg(test)]
#[path = "health_test.rs"]
mod tests;

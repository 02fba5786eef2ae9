//! Outbound webhook delivery for accepted contact submissions.
//!
//! DESIGN
//! ======
//! `ContactSink` is the seam the contact route depends on; `WebhookClient`
//! is the reqwest implementation and tests substitute mocks. Each delivery
//! POSTs a JSON envelope (`request_id`, `timestamp`, `form_data`,
//! `metadata`), signed with `X-Webhook-Signature` when a secret is set.
//!
//! TRADE-OFFS
//! ==========
//! Every failure (transport error or non-2xx) is retried up to
//! `max_retries` attempts with a linear backoff. A slow receiver therefore
//! holds the submitting request for up to `max_retries * timeout`.

use std::time::{Duration, Instant};

use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use super::signature::{generate_ping_id, sign_payload};
use crate::config::WebhookSettings;
use crate::error::ErrorCode;
use crate::models::ContactSubmission;

pub const SIGNATURE_HEADER: &str = "X-Webhook-Signature";
pub const PAYLOAD_SOURCE: &str = "portfolio_contact_form";
const DEFAULT_BACKOFF: Duration = Duration::from_millis(250);
const CONNECT_TIMEOUT_SECS: u64 = 5;

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, Clone, thiserror::Error)]
pub enum WebhookError {
    #[error("webhook request failed after {attempts} attempts (last status {status})")]
    Status { status: u16, attempts: u32 },
    #[error("webhook network error after {attempts} attempts: {message}")]
    Network { attempts: u32, message: String },
    #[error("webhook payload encoding failed: {0}")]
    Encode(String),
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl ErrorCode for WebhookError {
    fn error_code(&self) -> &'static str {
        "WEBHOOK_ERROR"
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Status { status: 429 | 500..=599, .. })
    }
}

// =============================================================================
// SINK TRAIT
// =============================================================================

/// Result of a delivered submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    pub status: u16,
    pub attempts: u32,
}

/// Result of a single health-check ping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PingOutcome {
    /// `None` when no response arrived.
    pub status: Option<u16>,
    pub elapsed: Duration,
    pub error: Option<String>,
}

impl PingOutcome {
    #[must_use]
    pub fn healthy(&self) -> bool {
        self.status.is_some_and(|s| (200..300).contains(&s))
    }
}

#[async_trait::async_trait]
pub trait ContactSink: Send + Sync {
    /// Forward a sanitized submission.
    async fn deliver(&self, submission: &ContactSubmission, request_id: &str) -> Result<Delivery, WebhookError>;

    /// Send one test payload and report how the receiver answered.
    async fn ping(&self) -> PingOutcome;
}

// =============================================================================
// PAYLOAD
// =============================================================================

#[derive(Debug, Serialize)]
pub struct PayloadMetadata<'a> {
    pub source: &'static str,
    pub version: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ContactPayload<'a> {
    pub request_id: &'a str,
    pub timestamp: String,
    pub form_data: &'a ContactSubmission,
    pub metadata: PayloadMetadata<'a>,
}

#[must_use]
pub fn now_rfc3339() -> String {
    OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default()
}

/// Build the JSON envelope for `submission`.
///
/// # Errors
///
/// Returns `WebhookError::Encode` if serialization fails.
pub fn contact_payload(
    submission: &ContactSubmission,
    request_id: &str,
    version: &str,
    timestamp: String,
) -> Result<serde_json::Value, WebhookError> {
    let payload = ContactPayload {
        request_id,
        timestamp,
        form_data: submission,
        metadata: PayloadMetadata { source: PAYLOAD_SOURCE, version },
    };
    serde_json::to_value(payload).map_err(|e| WebhookError::Encode(e.to_string()))
}

fn ping_payload() -> serde_json::Value {
    serde_json::json!({
        "request_id": generate_ping_id(),
        "timestamp": now_rfc3339(),
        "test": true,
        "message": "Health check ping from portfolio backend",
    })
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct WebhookClient {
    http: reqwest::Client,
    url: String,
    secret: String,
    max_retries: u32,
    backoff: Duration,
    version: String,
}

impl WebhookClient {
    /// # Errors
    ///
    /// Returns `WebhookError::HttpClientBuild` if the HTTP client fails to
    /// build.
    pub fn new(url: impl Into<String>, settings: &WebhookSettings, version: impl Into<String>) -> Result<Self, WebhookError> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS).min(settings.timeout))
            .build()
            .map_err(|e| WebhookError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            url: url.into(),
            secret: settings.secret.clone(),
            max_retries: settings.max_retries.max(1),
            backoff: DEFAULT_BACKOFF,
            version: version.into(),
        })
    }

    /// Override the pause between attempts (`attempt * backoff`).
    #[must_use]
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    async fn post(&self, body: &serde_json::Value) -> Result<reqwest::Response, reqwest::Error> {
        let mut request = self.http.post(&self.url).json(body);
        if let Some(signature) = sign_payload(body, &self.secret) {
            request = request.header(SIGNATURE_HEADER, signature);
        }
        request.send().await
    }
}

#[async_trait::async_trait]
impl ContactSink for WebhookClient {
    async fn deliver(&self, submission: &ContactSubmission, request_id: &str) -> Result<Delivery, WebhookError> {
        let body = contact_payload(submission, request_id, &self.version, now_rfc3339())?;
        tracing::info!(%request_id, signed = !self.secret.is_empty(), "sending contact form to webhook");

        let mut attempt = 0;
        loop {
            attempt += 1;
            let failure = match self.post(&body).await {
                Ok(resp) if resp.status().is_success() => {
                    let status = resp.status().as_u16();
                    tracing::info!(%request_id, status, attempt, "webhook request successful");
                    return Ok(Delivery { status, attempts: attempt });
                }
                Ok(resp) => {
                    let status = resp.status().as_u16();
                    tracing::error!(%request_id, status, attempt, "webhook HTTP error");
                    WebhookError::Status { status, attempts: attempt }
                }
                Err(e) => {
                    tracing::error!(%request_id, attempt, error = %e, "webhook network error");
                    WebhookError::Network { attempts: attempt, message: e.to_string() }
                }
            };
            if attempt >= self.max_retries {
                return Err(failure);
            }
            tokio::time::sleep(self.backoff * attempt).await;
        }
    }

    async fn ping(&self) -> PingOutcome {
        let started = Instant::now();
        match self.post(&ping_payload()).await {
            Ok(resp) => PingOutcome { status: Some(resp.status().as_u16()), elapsed: started.elapsed(), error: None },
            Err(e) => {
                tracing::error!(error = %e, "webhook health check failed");
                let error = if e.is_timeout() {
                    "Timeout connecting to webhook".to_owned()
                } else {
                    format!("Connection failed: {e}")
                };
                PingOutcome { status: None, elapsed: started.elapsed(), error: Some(error) }
            }
        }
    }
}

#[cfg(test)]
#[path = "webhook_test.rs"]
mod tests;

//! Contact form submission.
//!
//! DESIGN
//! ======
//! `POST /api/contact` runs a fixed pipeline: rate-limit peek, parse,
//! validate, sanitize, disposable-email check, quota record, webhook
//! delivery. Only submissions that pass every check spend quota.
//!
//! The body is taken as raw bytes so malformed JSON surfaces as a validation
//! error in the standard envelope instead of Axum's plain-text rejection.

use std::net::SocketAddr;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Response};

use crate::error::ApiError;
use crate::models::{ContactRequest, ContactResponse, FieldError};
use crate::rate_limit::{RateLimitStatus, client_ip};
use crate::services::signature::new_request_id;
use crate::services::validation::{is_disposable_email, validate_contact};
use crate::state::AppState;

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";

/// `POST /api/contact`
///
/// # Errors
///
/// Every rejection is an `ApiError` rendered as the error envelope.
pub async fn submit_contact(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let client = client_ip(&headers, peer.ip());
    state.rate_limiter.check(client).inspect_err(|_| {
        tracing::warn!(%client, "contact rate limit exceeded");
    })?;

    let request = parse_request(&body)?;
    let submission = validate_contact(request).map_err(ApiError::Validation)?;
    let submission = state.sanitizer.sanitize(submission)?;

    if is_disposable_email(&submission.email) {
        tracing::warn!(email = %submission.email, "disposable email rejected");
        return Err(ApiError::DisposableEmail);
    }

    let Some(sink) = state.sink.as_ref() else {
        tracing::error!("contact submission received but no webhook is configured");
        return Err(ApiError::WebhookNotConfigured);
    };

    let quota = state.rate_limiter.check_and_record(client)?;

    let request_id = new_request_id();
    tracing::info!(%request_id, %client, "processing contact form");
    let delivery = sink.deliver(&submission, &request_id).await?;
    tracing::info!(%request_id, attempts = delivery.attempts, "contact form delivered");

    let body = ContactResponse { success: true, message: SUCCESS_MESSAGE.to_owned(), request_id: Some(request_id) };
    let mut response = Json(body).into_response();
    set_quota_headers(&mut response, quota);
    Ok(response)
}

fn parse_request(body: &[u8]) -> Result<ContactRequest, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        ApiError::Validation(vec![FieldError::new("body", "json_invalid", format!("Invalid JSON body: {e}"))])
    })
}

fn set_quota_headers(response: &mut Response, quota: RateLimitStatus) {
    let headers = response.headers_mut();
    headers.insert("x-ratelimit-limit", HeaderValue::from(quota.limit));
    headers.insert("x-ratelimit-remaining", HeaderValue::from(quota.remaining));
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;

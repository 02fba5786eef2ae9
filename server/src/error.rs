//! API error type and its HTTP rendering.
//!
//! DESIGN
//! ======
//! Handlers return `Result<_, ApiError>`. `IntoResponse` maps each variant to
//! a status code and the `ErrorResponse` envelope in one place, so every
//! failure carries a stable machine-readable `error_code`.

use axum::Json;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::models::{ErrorResponse, FieldError};
use crate::rate_limit::RateLimitError;
use crate::services::validation::SanitizeError;
use crate::services::webhook::WebhookError;

/// Machine-readable code carried by an error.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Validation error. Please check your input.")]
    Validation(Vec<FieldError>),
    #[error("{0}")]
    InvalidInput(#[from] SanitizeError),
    #[error("Please use a permanent email address")]
    DisposableEmail,
    #[error("Too many requests. Please try again later.")]
    RateLimited(#[from] RateLimitError),
    #[error("Contact delivery is not configured.")]
    WebhookNotConfigured,
    #[error("Unable to process your request. Please try again later.")]
    Webhook(WebhookError),
    #[error("An unexpected error occurred. Please try again later.")]
    Internal(String),
}

/// Delivery failures are the receiver's problem (503); payload encoding and
/// client construction are ours (500).
impl From<WebhookError> for ApiError {
    fn from(err: WebhookError) -> Self {
        match err {
            WebhookError::Encode(_) | WebhookError::HttpClientBuild(_) => Self::Internal(err.to_string()),
            WebhookError::Status { .. } | WebhookError::Network { .. } => Self::Webhook(err),
        }
    }
}

impl ErrorCode for ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::DisposableEmail => "DISPOSABLE_EMAIL",
            Self::RateLimited(_) => "RATE_LIMIT_EXCEEDED",
            Self::WebhookNotConfigured => "WEBHOOK_NOT_CONFIGURED",
            Self::Webhook(e) => e.error_code(),
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn retryable(&self) -> bool {
        match self {
            Self::RateLimited(_) => true,
            Self::Webhook(e) => e.retryable(),
            _ => false,
        }
    }
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InvalidInput(_) | Self::DisposableEmail => StatusCode::BAD_REQUEST,
            Self::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            Self::WebhookNotConfigured | Self::Webhook(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            Self::Validation(errors) => Some(serde_json::json!({ "errors": errors })),
            Self::RateLimited(e) => Some(serde_json::json!({ "retry_after_seconds": e.retry_after_secs() })),
            _ => None,
        }
    }

    #[must_use]
    pub fn body(&self) -> ErrorResponse {
        ErrorResponse {
            success: false,
            message: self.to_string(),
            error_code: Some(self.error_code().to_owned()),
            details: self.details(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Internal(detail) => tracing::error!(error = %detail, "unexpected error"),
            other => tracing::debug!(code = other.error_code(), retryable = other.retryable(), "request rejected"),
        }
        let mut response = (self.status(), Json(self.body())).into_response();
        if let Self::RateLimited(e) = &self {
            response.headers_mut().insert(header::RETRY_AFTER, HeaderValue::from(e.retry_after_secs()));
        }
        response
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

//! Server settings parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` loads `.env` (via `dotenvy`) and calls `Settings::from_env` once at
//! startup; the result is shared read-only through `AppState`. Parsing goes
//! through a key lookup closure so tests never touch the process environment.

use std::time::Duration;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ENVIRONMENT: &str = "production";
pub const DEFAULT_API_TITLE: &str = "Portfolio Contact API";
pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:5173,http://localhost:3000";
pub const DEFAULT_RATE_LIMIT_PER_HOUR: u32 = 3;
pub const DEFAULT_WEBHOOK_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_WEBHOOK_MAX_RETRIES: u32 = 3;

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key}: cannot parse {value:?}")]
    Parse { key: &'static str, value: String },
    #[error("{key}: {value} outside {min}..={max}")]
    OutOfRange { key: &'static str, value: u64, min: u64, max: u64 },
    #[error("{key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

// =============================================================================
// SETTINGS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookSettings {
    pub url: Option<String>,
    pub timeout: Duration,
    /// Signing key for `X-Webhook-Signature`; empty disables signing.
    pub secret: String,
    pub max_retries: u32,
}

impl WebhookSettings {
    #[must_use]
    pub fn signature_enabled(&self) -> bool {
        !self.secret.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub api_title: String,
    pub api_version: String,
    pub allowed_origins: AllowedOrigins,
    pub rate_limit_per_hour: u32,
    pub webhook: WebhookSettings,
    pub log_format: LogFormat,
}

impl Settings {
    /// Build settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for the first variable that fails to parse or
    /// falls outside its allowed range.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup.
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// See [`Settings::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Parse { key: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let rate_limit_per_hour = bounded(get("RATE_LIMIT_PER_HOUR"), "RATE_LIMIT_PER_HOUR", DEFAULT_RATE_LIMIT_PER_HOUR.into(), 1, 100)?;
        let timeout_secs = bounded(get("WEBHOOK_TIMEOUT_SECS"), "WEBHOOK_TIMEOUT_SECS", DEFAULT_WEBHOOK_TIMEOUT_SECS, 1, 30)?;
        let max_retries = bounded(get("WEBHOOK_MAX_RETRIES"), "WEBHOOK_MAX_RETRIES", DEFAULT_WEBHOOK_MAX_RETRIES.into(), 1, 10)?;

        let url = get("WEBHOOK_URL").map(parse_webhook_url).transpose()?;

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port,
            environment: get("ENVIRONMENT").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_owned()),
            api_title: get("API_TITLE").unwrap_or_else(|| DEFAULT_API_TITLE.to_owned()),
            api_version: get("API_VERSION").unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_owned()),
            allowed_origins: parse_origins(get("ALLOWED_ORIGINS").as_deref().unwrap_or(DEFAULT_ALLOWED_ORIGINS)),
            rate_limit_per_hour: narrow(rate_limit_per_hour),
            webhook: WebhookSettings {
                url,
                timeout: Duration::from_secs(timeout_secs),
                secret: get("WEBHOOK_SECRET").unwrap_or_default(),
                max_retries: narrow(max_retries),
            },
            log_format: parse_log_format(get("LOG_FORMAT").as_deref())?,
        })
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }

    /// Host and port for `TcpListener::bind`. Kept as a pair so IPv6 hosts
    /// such as `::` need no brackets.
    #[must_use]
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn bounded(raw: Option<String>, key: &'static str, default: u64, min: u64, max: u64) -> Result<u64, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    let value = raw.parse::<u64>().map_err(|_| ConfigError::Parse { key, value: raw })?;
    if !(min..=max).contains(&value) {
        return Err(ConfigError::OutOfRange { key, value, min, max });
    }
    Ok(value)
}

/// Callers only pass values already bounded to small ranges.
fn narrow(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

fn parse_webhook_url(raw: String) -> Result<String, ConfigError> {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        Ok(raw)
    } else {
        Err(ConfigError::Invalid { key: "WEBHOOK_URL", reason: format!("{raw:?} is not an http(s) URL") })
    }
}

fn parse_origins(raw: &str) -> AllowedOrigins {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_owned)
        .collect();
    if origins.iter().any(|o| o == "*") {
        AllowedOrigins::Any
    } else {
        AllowedOrigins::List(origins)
    }
}

fn parse_log_format(raw: Option<&str>) -> Result<LogFormat, ConfigError> {
    match raw.map(str::to_ascii_lowercase).as_deref() {
        None | Some("text") => Ok(LogFormat::Text),
        Some("json") => Ok(LogFormat::Json),
        Some(other) => Err(ConfigError::Invalid {
            key: "LOG_FORMAT",
            reason: format!("unsupported format '{other}' (expected 'text' or 'json')"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

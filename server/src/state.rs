//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the parsed settings, the per-IP rate limiter, the compiled
//! sanitizer, and the optional contact sink. `sink` is `None` when no
//! `WEBHOOK_URL` is configured.

use std::sync::Arc;

use crate::config::Settings;
use crate::rate_limit::RateLimiter;
use crate::services::validation::Sanitizer;
use crate::services::webhook::ContactSink;

/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub rate_limiter: RateLimiter,
    pub sanitizer: Arc<Sanitizer>,
    pub sink: Option<Arc<dyn ContactSink>>,
}

impl AppState {
    #[must_use]
    pub fn new(settings: Settings, sanitizer: Sanitizer, sink: Option<Arc<dyn ContactSink>>) -> Self {
        let rate_limiter = RateLimiter::per_hour(settings.rate_limit_per_hour);
        Self { settings: Arc::new(settings), rate_limiter, sanitizer: Arc::new(sanitizer), sink }
    }

    #[must_use]
    pub fn webhook_configured(&self) -> bool {
        self.sink.is_some()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    use super::*;
    use crate::models::ContactSubmission;
    use crate::services::webhook::{Delivery, PingOutcome, WebhookError};

    /// Sink that records deliveries and answers with a fixed result.
    #[derive(Default)]
    pub struct MockSink {
        pub delivered: Mutex<Vec<(ContactSubmission, String)>>,
        /// When set, `deliver` fails with this error.
        pub failure: Option<WebhookError>,
        pub ping_status: Option<u16>,
    }

    #[async_trait::async_trait]
    impl ContactSink for MockSink {
        async fn deliver(&self, submission: &ContactSubmission, request_id: &str) -> Result<Delivery, WebhookError> {
            if let Some(err) = &self.failure {
                return Err(err.clone());
            }
            self.delivered.lock().unwrap().push((submission.clone(), request_id.to_owned()));
            Ok(Delivery { status: 200, attempts: 1 })
        }

        async fn ping(&self) -> PingOutcome {
            match self.ping_status {
                Some(status) => PingOutcome { status: Some(status), elapsed: Duration::from_millis(12), error: None },
                None => PingOutcome {
                    status: None,
                    elapsed: Duration::from_millis(12),
                    error: Some("Timeout connecting to webhook".into()),
                },
            }
        }
    }

    /// Settings with every default applied plus `pairs`.
    #[must_use]
    pub fn test_settings(pairs: &[(&str, &str)]) -> Settings {
        let env: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        Settings::from_lookup(|key| env.get(key).cloned()).expect("test settings should parse")
    }

    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(test_settings(&[]), Sanitizer::new().expect("patterns compile"), None)
    }

    #[must_use]
    pub fn test_app_state_with_sink(settings: Settings, sink: Arc<dyn ContactSink>) -> AppState {
        AppState::new(settings, Sanitizer::new().expect("patterns compile"), Some(sink))
    }
}

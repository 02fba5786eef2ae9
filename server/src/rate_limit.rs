//! In-memory rate limiting for contact submissions.
//!
//! DESIGN
//! ======
//! Sliding-window counters backed by `HashMap<IpAddr, VecDeque<Instant>>`.
//! One limit is enforced: `RATE_LIMIT_PER_HOUR` accepted submissions per
//! client IP per hour. `check` peeks so callers can refuse early without
//! spending quota; `check_and_record` is the atomic admit. The client IP is
//! the first `X-Forwarded-For` entry when present, otherwise the socket peer.
//!
//! TRADE-OFFS
//! ==========
//! State is per process and lost on restart. Idle keys are dropped by a
//! periodic sweep rather than on every request.

use std::collections::{HashMap, VecDeque};
use std::net::IpAddr;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use axum::http::HeaderMap;

pub const HOUR: Duration = Duration::from_secs(3600);

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RateLimitError {
    #[error("rate limit exceeded (max {limit} requests/{window_secs}s)")]
    Exceeded { limit: u32, window_secs: u64, retry_after_secs: u64 },
}

impl RateLimitError {
    #[must_use]
    pub fn retry_after_secs(&self) -> u64 {
        match self {
            Self::Exceeded { retry_after_secs, .. } => *retry_after_secs,
        }
    }
}

/// Quota left after an admitted request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitStatus {
    pub limit: u32,
    pub remaining: u32,
}

// =============================================================================
// RATE LIMITER
// =============================================================================

#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<HashMap<IpAddr, VecDeque<Instant>>>>,
    limit: u32,
    window: Duration,
}

impl RateLimiter {
    #[must_use]
    pub fn new(limit: u32, window: Duration) -> Self {
        Self { inner: Arc::new(Mutex::new(HashMap::new())), limit, window }
    }

    #[must_use]
    pub fn per_hour(limit: u32) -> Self {
        Self::new(limit, HOUR)
    }

    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Check the client's window without recording anything.
    ///
    /// # Errors
    ///
    /// Returns `RateLimitError::Exceeded` when the window is already full.
    pub fn check(&self, client: IpAddr) -> Result<RateLimitStatus, RateLimitError> {
        self.check_at(client, Instant::now())
    }

    fn check_at(&self, client: IpAddr, now: Instant) -> Result<RateLimitStatus, RateLimitError> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(deque) = inner.get_mut(&client) else {
            return Ok(RateLimitStatus { limit: self.limit, remaining: self.limit });
        };
        prune_window(deque, now, self.window);
        let used = self.admit(deque, now)?;
        Ok(RateLimitStatus { limit: self.limit, remaining: self.limit - used })
    }

    /// Check the client's window, then record the request.
    ///
    /// # Errors
    ///
    /// Returns `RateLimitError::Exceeded` when the window is full; the
    /// rejected request is not recorded.
    pub fn check_and_record(&self, client: IpAddr) -> Result<RateLimitStatus, RateLimitError> {
        self.check_and_record_at(client, Instant::now())
    }

    fn check_and_record_at(&self, client: IpAddr, now: Instant) -> Result<RateLimitStatus, RateLimitError> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let deque = inner.entry(client).or_default();
        prune_window(deque, now, self.window);
        let used = self.admit(deque, now)?;
        deque.push_back(now);
        Ok(RateLimitStatus { limit: self.limit, remaining: self.limit - used - 1 })
    }

    /// Entries in the pruned window, or the rejection when it is full.
    fn admit(&self, deque: &VecDeque<Instant>, now: Instant) -> Result<u32, RateLimitError> {
        let used = u32::try_from(deque.len()).unwrap_or(u32::MAX);
        if used < self.limit {
            return Ok(used);
        }
        let retry_after_secs = deque.front().map_or(self.window.as_secs(), |oldest| {
            let elapsed = now.duration_since(*oldest);
            ceil_secs(self.window.saturating_sub(elapsed)).max(1)
        });
        Err(RateLimitError::Exceeded { limit: self.limit, window_secs: self.window.as_secs(), retry_after_secs })
    }

    /// Drop keys whose windows have fully expired. Returns how many remain.
    pub fn sweep(&self) -> usize {
        self.sweep_at(Instant::now())
    }

    fn sweep_at(&self, now: Instant) -> usize {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.retain(|_, deque| {
            prune_window(deque, now, self.window);
            !deque.is_empty()
        });
        inner.len()
    }
}

/// Sweep idle keys every `period` for the life of the process.
pub fn spawn_sweeper(limiter: RateLimiter, period: Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            let tracked = limiter.sweep();
            tracing::debug!(tracked, "rate limiter sweep");
        }
    })
}

// =============================================================================
// CLIENT KEY
// =============================================================================

/// Client IP for rate limiting: the first `X-Forwarded-For` hop when it
/// parses as an address, else the socket peer.
#[must_use]
pub fn client_ip(headers: &HeaderMap, peer: IpAddr) -> IpAddr {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .and_then(|first| first.trim().parse::<IpAddr>().ok())
        .unwrap_or(peer)
}

// =============================================================================
// HELPERS
// =============================================================================

fn prune_window(deque: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&front) = deque.front() {
        if now.duration_since(front) >= window {
            deque.pop_front();
        } else {
            break;
        }
    }
}

fn ceil_secs(d: Duration) -> u64 {
    d.as_secs() + u64::from(d.subsec_nanos() > 0)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod tests;

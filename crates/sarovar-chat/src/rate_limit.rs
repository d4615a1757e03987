use std::collections::VecDeque;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use tracing::debug;

/// Sliding-window limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Requests allowed inside one window
    pub max_requests: usize,
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 20,
            window: Duration::from_secs(60),
        }
    }
}

impl RateLimitConfig {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
        }
    }
}

/// Per-session sliding-window request counter.
///
/// Every session keeps the timestamps of its accepted requests; stale ones are
/// dropped on each check. Refused requests are not recorded. Sessions are
/// never evicted, so memory grows with the number of distinct session ids.
#[derive(Debug, Default)]
pub struct RateLimiter {
    config: RateLimitConfig,
    windows: DashMap<String, VecDeque<Instant>>,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            windows: DashMap::new(),
        }
    }

    /// Returns `true` when the request is allowed
    pub fn check(&self, session_id: &str) -> bool {
        self.check_at(session_id, Instant::now())
    }

    /// [`check`](Self::check) against an explicit clock reading
    pub fn check_at(&self, session_id: &str, now: Instant) -> bool {
        let mut window = self.windows.entry(session_id.to_string()).or_default();

        while let Some(&oldest) = window.front() {
            if now.saturating_duration_since(oldest) < self.config.window {
                break;
            }
            window.pop_front();
        }

        if window.len() >= self.config.max_requests {
            debug!(session_id, count = window.len(), "rate limit reached");
            return false;
        }

        window.push_back(now);
        true
    }

    /// Number of sessions with a window record
    pub fn tracked_sessions(&self) -> usize {
        self.windows.len()
    }
}

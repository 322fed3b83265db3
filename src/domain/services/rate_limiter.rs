//! Sliding-window limiter keyed by a client identifier.
//!
//! Identifiers come from request headers and are not authenticated, so the
//! limiter throttles honest clients and casual floods only. It is not a
//! security control.

use std::collections::VecDeque;
use std::sync::Arc;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use crate::domain::ports::Clock;

pub struct SlidingWindowRateLimiter {
    max_requests: usize,
    window: Duration,
    clock: Arc<dyn Clock>,
    windows: DashMap<String, VecDeque<DateTime<Utc>>>,
}

impl SlidingWindowRateLimiter {
    pub fn new(max_requests: usize, window: std::time::Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            max_requests,
            window: Duration::from_std(window).unwrap_or(Duration::MAX),
            clock,
            windows: DashMap::new(),
        }
    }

    /// Records an attempt for `identifier` and reports whether it is allowed.
    /// Rejected attempts are not recorded.
    pub fn check_and_record(&self, identifier: &str) -> bool {
        let now = self.clock.now();
        let mut timestamps = self.windows.entry(identifier.to_string()).or_default();
        prune(&mut timestamps, now, self.window);

        if timestamps.len() >= self.max_requests {
            return false;
        }
        timestamps.push_back(now);
        true
    }

    /// Time until `identifier` may make another attempt. Zero when it already may.
    pub fn retry_after(&self, identifier: &str) -> std::time::Duration {
        if self.max_requests == 0 {
            return self.window.to_std().unwrap_or_default();
        }

        let now = self.clock.now();
        let Some(timestamps) = self.windows.get(identifier) else {
            return std::time::Duration::ZERO;
        };

        let live: Vec<&DateTime<Utc>> = timestamps.iter().filter(|t| now - **t < self.window).collect();
        if live.len() < self.max_requests {
            return std::time::Duration::ZERO;
        }

        // The attempt that must expire before a slot frees up.
        let blocking = live[live.len() - self.max_requests];
        (*blocking + self.window - now).to_std().unwrap_or_default()
    }

    /// Drops identifiers whose windows hold no recent attempts.
    pub fn prune_idle(&self) -> usize {
        let now = self.clock.now();
        let before = self.windows.len();
        self.windows.retain(|_, timestamps| {
            prune(timestamps, now, self.window);
            !timestamps.is_empty()
        });
        before.saturating_sub(self.windows.len())
    }

    pub fn tracked_identifiers(&self) -> usize {
        self.windows.len()
    }
}

fn prune(timestamps: &mut VecDeque<DateTime<Utc>>, now: DateTime<Utc>, window: Duration) {
    while let Some(oldest) = timestamps.front() {
        if now - *oldest >= window {
            timestamps.pop_front();
        } else {
            break;
        }
    }
}

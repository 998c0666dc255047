use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;

pub const DEFAULT_MAX_ATTEMPTS: usize = 5;
pub const DEFAULT_WINDOW_MS: i64 = 900_000; // 15 minutes

/// Millisecond clock, injectable so tests can fast-forward time.
type Clock = Arc<dyn Fn() -> i64 + Send + Sync>;

/// Sliding-window attempt limiter keyed by a caller-supplied identifier
/// (normally a lower-cased email address).
///
/// Cloning is cheap and shares the underlying attempt map. Identifiers are
/// fully independent: checking one never touches another's entries. State is
/// in-memory only, so all limits reset when the process restarts.
#[derive(Clone)]
pub struct RateLimiter {
    attempts: Arc<Mutex<HashMap<String, Vec<i64>>>>,
    max_attempts: usize,
    window_ms: i64,
    clock: Clock,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_WINDOW_MS)
    }
}

impl RateLimiter {
    pub fn new(max_attempts: usize, window_ms: i64) -> Self {
        Self::with_clock(max_attempts, window_ms, || Utc::now().timestamp_millis())
    }

    /// Like `new`, but with a caller-supplied clock returning milliseconds
    /// since the Unix epoch.
    pub fn with_clock<C>(max_attempts: usize, window_ms: i64, clock: C) -> Self
    where
        C: Fn() -> i64 + Send + Sync + 'static,
    {
        Self {
            attempts: Arc::new(Mutex::new(HashMap::new())),
            max_attempts,
            window_ms,
            clock: Arc::new(clock),
        }
    }

    /// Check whether `identifier` may attempt now, and record the attempt if
    /// so. A denied attempt is never recorded. Timestamps that have aged out
    /// of the window are pruned on every call, allowed or denied.
    pub fn is_allowed(&self, identifier: &str) -> bool {
        let now = (self.clock)();
        let mut map = self.attempts.lock().unwrap_or_else(|e| e.into_inner());
        let entry = map.entry(identifier.to_string()).or_default();
        entry.retain(|&t| now - t < self.window_ms);

        if entry.len() >= self.max_attempts {
            return false;
        }
        entry.push(now);
        true
    }

    /// Milliseconds until the oldest recorded attempt leaves the window, or 0
    /// when no lockout is in effect. This read leaves the stored list as-is;
    /// pruning of expired entries happens only inside `is_allowed`.
    pub fn remaining_ms(&self, identifier: &str) -> i64 {
        let map = self.attempts.lock().unwrap_or_else(|e| e.into_inner());
        let Some(entry) = map.get(identifier) else {
            return 0;
        };
        if entry.len() < self.max_attempts {
            return 0;
        }
        let now = (self.clock)();
        let oldest = entry.iter().copied().min().unwrap_or(now);
        (self.window_ms - (now - oldest)).max(0)
    }
}

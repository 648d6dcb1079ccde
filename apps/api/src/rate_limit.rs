//! Request Gate — per-caller admission for the draft endpoint.
//!
//! Fixed window: a caller's first request opens a 24-hour window; up to
//! `DAILY_LIMIT` requests are allowed inside it, everything after is rejected
//! until the window expires. State is process-memory only: it does not
//! survive a restart and is not shared across instances, so the quota is
//! best-effort rather than a security control. Stale entries are never
//! evicted.

use std::collections::HashMap;
use std::sync::Mutex;

use axum::http::HeaderMap;
use chrono::{DateTime, Duration, Utc};

/// Max draft requests per caller per window.
pub const DAILY_LIMIT: u32 = 10;

const WINDOW_HOURS: i64 = 24;

#[derive(Debug, Clone)]
struct RateLimitEntry {
    count: u32,
    reset_at: DateTime<Utc>,
}

/// Caller-keyed request counter. Constructed in `main` and shared via
/// `AppState`, never module-global, so tests get isolated instances.
pub struct RateLimiter {
    entries: Mutex<HashMap<String, RateLimitEntry>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns true if the caller may proceed. The increment-then-compare runs
    /// under the map lock, so concurrent requests on the same key cannot
    /// undercount.
    pub fn allow(&self, key: &str) -> bool {
        self.allow_at(key, Utc::now())
    }

    fn allow_at(&self, key: &str, now: DateTime<Utc>) -> bool {
        let mut entries = self.entries.lock().expect("rate limit lock poisoned");

        match entries.get_mut(key) {
            Some(entry) if now <= entry.reset_at => {
                entry.count += 1;
                entry.count <= DAILY_LIMIT
            }
            _ => {
                entries.insert(
                    key.to_string(),
                    RateLimitEntry {
                        count: 1,
                        reset_at: now + Duration::hours(WINDOW_HOURS),
                    },
                );
                true
            }
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

/// Derives the rate-limit bucket key from the inbound request headers:
/// first entry of `x-forwarded-for`, else `x-real-ip`, else `"unknown"`.
///
/// Callers with neither header collapse into one shared bucket; acceptable
/// only behind a reverse proxy that always sets one of them.
pub fn caller_key(headers: &HeaderMap) -> String {
    if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    headers
        .get("x-real-ip")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

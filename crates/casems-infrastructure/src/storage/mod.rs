//! Session cache storage backends.

mod file_session_cache;
mod memory_session_cache;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub use file_session_cache::FileSessionCache;
pub use memory_session_cache::MemorySessionCache;

/// One cached value with its expiry instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CacheEntry {
    value: String,
    expires_at: DateTime<Utc>,
}

/// Longest lifetime an entry can be given, in either direction.
const MAX_TTL_DAYS: i64 = 36_500;

impl CacheEntry {
    /// Creates an entry expiring `ttl` after `now`.
    ///
    /// The TTL is clamped to `MAX_TTL_DAYS` so the expiry always fits in a
    /// timestamp and survives a JSON round trip.
    fn new(value: &str, now: DateTime<Utc>, ttl: Duration) -> Self {
        let bound = Duration::days(MAX_TTL_DAYS);
        let ttl = ttl.clamp(-bound, bound);
        Self {
            value: value.to_string(),
            expires_at: now.checked_add_signed(ttl).unwrap_or(now),
        }
    }

    fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }
}

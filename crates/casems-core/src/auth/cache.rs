//! External session cache trait.

use crate::error::Result;
use async_trait::async_trait;
use chrono::Duration;

/// A client-persisted key/value store with per-entry expiry.
///
/// Values are opaque strings so that a corrupted entry can be read back and
/// rejected by the caller. An expired entry reads as absent.
#[async_trait]
pub trait SessionCache: Send + Sync {
    /// Reads a live entry.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes an entry that expires `ttl` from now, replacing any previous
    /// value.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<()>;

    /// Removes an entry. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;
}

//! JSON-file session cache.
//!
//! Plays the role of a browser cookie jar: entries survive restarts until
//! they expire. The whole jar is one JSON object keyed by entry name.

use super::CacheEntry;
use crate::paths::{CasemsPaths, ServiceType};
use async_trait::async_trait;
use casems_core::auth::SessionCache;
use casems_core::error::{CasemsError, Result};
use chrono::{Duration, Utc};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tokio::fs;
use tokio::sync::Mutex;

type Jar = BTreeMap<String, CacheEntry>;

/// File-backed session cache.
///
/// A jar file that cannot be parsed is treated as empty and overwritten on
/// the next write.
pub struct FileSessionCache {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl FileSessionCache {
    /// Creates a cache at the default location
    /// (`~/.config/casems/session_cache.json`).
    pub fn new() -> Result<Self> {
        let path = CasemsPaths::default()
            .get_path(ServiceType::SessionCache)
            .map_err(|e| CasemsError::config(e.to_string()))?;
        Ok(Self::with_path(path))
    }

    /// Creates a cache at a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    async fn load(&self) -> Result<Jar> {
        if !fs::try_exists(&self.path).await? {
            return Ok(Jar::new());
        }

        let content = fs::read(&self.path).await?;
        match serde_json::from_slice(&content) {
            Ok(jar) => Ok(jar),
            Err(e) => {
                tracing::warn!(
                    "[FileSessionCache] Ignoring unreadable jar {}: {}",
                    self.path.display(),
                    e
                );
                Ok(Jar::new())
            }
        }
    }

    async fn store(&self, jar: &Jar) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(jar)?;
        fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl SessionCache for FileSessionCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock().await;
        let mut jar = self.load().await?;

        match jar.get(key) {
            Some(entry) if entry.is_live(Utc::now()) => Ok(Some(entry.value.clone())),
            Some(_) => {
                tracing::debug!("[FileSessionCache] Entry '{}' expired", key);
                jar.remove(key);
                self.store(&jar).await?;
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut jar = self.load().await?;
        jar.insert(
            key.to_string(),
            CacheEntry::new(value, Utc::now(), ttl),
        );
        self.store(&jar).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut jar = self.load().await?;
        if jar.remove(key).is_some() {
            self.store(&jar).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let cache = FileSessionCache::with_path(temp_dir.path().join("jar.json"));
        assert!(cache.get("cms_user").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_entries_survive_new_instance() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("jar.json");

        let cache = FileSessionCache::with_path(path.clone());
        cache
            .set("cms_user", r#"{"id":"1"}"#, Duration::days(7))
            .await
            .unwrap();

        let reopened = FileSessionCache::with_path(path);
        assert_eq!(
            reopened.get("cms_user").await.unwrap().as_deref(),
            Some(r#"{"id":"1"}"#)
        );

        reopened.remove("cms_user").await.unwrap();
        assert!(cache.get("cms_user").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_expired_entry_is_purged() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("jar.json");
        let cache = FileSessionCache::with_path(path.clone());

        cache
            .set("cms_user", "stale", Duration::seconds(-5))
            .await
            .unwrap();
        assert!(cache.get("cms_user").await.unwrap().is_none());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale"));
    }

    #[tokio::test]
    async fn test_corrupt_jar_reads_empty_and_is_overwritten() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("jar.json");
        std::fs::write(&path, "{ not json").unwrap();

        let cache = FileSessionCache::with_path(path);
        assert!(cache.get("cms_user").await.unwrap().is_none());

        cache.set("cms_user", "v", Duration::days(1)).await.unwrap();
        assert_eq!(cache.get("cms_user").await.unwrap().as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn test_non_utf8_jar_reads_empty_and_is_overwritten() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("jar.json");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let cache = FileSessionCache::with_path(path.clone());
        assert!(cache.get("cms_user").await.unwrap().is_none());
        cache.remove("cms_user").await.unwrap();

        cache.set("cms_user", "v", Duration::days(7)).await.unwrap();
        assert_eq!(cache.get("cms_user").await.unwrap().as_deref(), Some("v"));
        assert!(std::fs::read_to_string(&path).is_ok());
    }

    #[tokio::test]
    async fn test_huge_ttl_is_clamped() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("jar.json");
        let cache = FileSessionCache::with_path(path.clone());

        cache.set("cms_user", "v", Duration::MAX).await.unwrap();
        cache.set("other", "w", Duration::MIN).await.unwrap();

        let reopened = FileSessionCache::with_path(path);
        assert_eq!(reopened.get("cms_user").await.unwrap().as_deref(), Some("v"));
        assert!(reopened.get("other").await.unwrap().is_none());
    }
}

//! Configuration service implementation.
//!
//! Loads the application configuration from `config.toml` and caches it.

use crate::paths::{CasemsPaths, ServiceType};
use casems_core::config::AppConfig;
use casems_core::error::{CasemsError, Result};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Configuration service that loads and caches [`AppConfig`].
///
/// A missing file yields the defaults. A file that exists but cannot be
/// parsed is an error.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    /// Creates a service reading `config.toml` from the platform config
    /// directory.
    pub fn new() -> Result<Self> {
        let path = CasemsPaths::default()
            .get_path(ServiceType::Config)
            .map_err(|e| CasemsError::config(e.to_string()))?;
        Ok(Self::with_path(path))
    }

    /// Creates a service reading from a custom path.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> Result<AppConfig> {
        {
            let read_lock = self
                .config
                .read()
                .map_err(|e| CasemsError::internal(format!("Config lock poisoned: {}", e)))?;
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = self.load()?;

        let mut write_lock = self
            .config
            .write()
            .map_err(|e| CasemsError::internal(format!("Config lock poisoned: {}", e)))?;
        *write_lock = Some(loaded.clone());

        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = None;
        }
    }

    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            tracing::debug!(
                "[ConfigService] {} not found, using defaults",
                self.path.display()
            );
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let config = AppConfig::from_toml_str(&content)?;
        tracing::debug!("[ConfigService] Loaded {}", self.path.display());
        Ok(config)
    }
}

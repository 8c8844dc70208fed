//! Application configuration model.
//!
//! Loaded from `config.toml`; every field has a default so a partial (or
//! missing) file is valid.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::{CasemsError, Result};

/// Upper bound for `auth.cache_ttl_days`.
pub const MAX_CACHE_TTL_DAYS: i64 = 36_500;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub auth: AuthSettings,
    #[serde(default)]
    pub store: StoreSettings,
}

impl AppConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that parse but cannot be used.
    pub fn validate(&self) -> Result<()> {
        let ttl = self.auth.cache_ttl_days;
        if !(1..=MAX_CACHE_TTL_DAYS).contains(&ttl) {
            return Err(CasemsError::validation(format!(
                "auth.cache_ttl_days must be between 1 and {}, got {}",
                MAX_CACHE_TTL_DAYS, ttl
            )));
        }
        Ok(())
    }

    /// Renders this configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Mock authentication settings.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AuthSettings {
    /// ID of the built-in demo administrator.
    pub demo_id: String,
    pub demo_email: String,
    pub demo_password: String,
    pub demo_name: String,
    /// Simulated round trip of `login`.
    pub login_latency_ms: u64,
    /// Simulated round trip of `register`.
    pub register_latency_ms: u64,
    /// Simulated round trip of the password-reset flows.
    pub password_reset_latency_ms: u64,
    /// Key of the session entry in the external cache.
    pub cache_key: String,
    pub cache_ttl_days: i64,
    pub min_password_len: usize,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            demo_id: "1".to_string(),
            demo_email: "admin@casems.com".to_string(),
            demo_password: "admin123".to_string(),
            demo_name: "Admin User".to_string(),
            login_latency_ms: 800,
            register_latency_ms: 1000,
            password_reset_latency_ms: 1000,
            cache_key: "cms_user".to_string(),
            cache_ttl_days: 7,
            min_password_len: 6,
        }
    }
}

impl AuthSettings {
    /// Settings with every simulated latency set to zero.
    pub fn instant() -> Self {
        Self {
            login_latency_ms: 0,
            register_latency_ms: 0,
            password_reset_latency_ms: 0,
            ..Self::default()
        }
    }

    pub fn login_latency(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.login_latency_ms)
    }

    pub fn register_latency(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.register_latency_ms)
    }

    pub fn password_reset_latency(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.password_reset_latency_ms)
    }

    /// Lifetime of the remembered session, clamped to
    /// `0..=MAX_CACHE_TTL_DAYS` days.
    pub fn cache_ttl(&self) -> Duration {
        Duration::days(self.cache_ttl_days.clamp(0, MAX_CACHE_TTL_DAYS))
    }
}

/// Entity store settings.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct StoreSettings {
    /// Start from the bundled demo cases, categories and comments.
    pub seed_demo_data: bool,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
        }
    }
}

//! Unified path management for CaseMS files.
//!
//! ```text
//! ~/.config/casems/            # Config directory
//! ├── config.toml              # Application configuration
//! └── session_cache.json       # Remembered sign-in (expires after 7 days)
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Files managed by CaseMS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    Config,
    SessionCache,
}

impl ServiceType {
    fn file_name(self) -> &'static str {
        match self {
            ServiceType::Config => "config.toml",
            ServiceType::SessionCache => "session_cache.json",
        }
    }
}

/// Resolves CaseMS file locations.
///
/// `base_dir` overrides the platform config directory (used by tests and
/// the `--config-dir` flag).
#[derive(Debug, Clone, Default)]
pub struct CasemsPaths {
    base_dir: Option<PathBuf>,
}

impl CasemsPaths {
    const APP_DIR: &'static str = "casems";

    pub fn new(base_dir: Option<PathBuf>) -> Self {
        Self { base_dir }
    }

    /// Returns the CaseMS configuration directory (e.g. `~/.config/casems/`).
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(Self::APP_DIR))
                .ok_or(PathError::ConfigDirNotFound),
        }
    }

    /// Returns the path of one managed file.
    pub fn get_path(&self, service: ServiceType) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join(service.file_name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_dir_override() {
        let paths = CasemsPaths::new(Some(PathBuf::from("/tmp/casems-test")));
        assert_eq!(
            paths.get_path(ServiceType::Config).unwrap(),
            PathBuf::from("/tmp/casems-test/config.toml")
        );
        assert_eq!(
            paths.get_path(ServiceType::SessionCache).unwrap(),
            PathBuf::from("/tmp/casems-test/session_cache.json")
        );
    }
}

//! Path management for fincast
//!
//! Provides XDG-compliant path resolution for the configuration file.
//!
//! ## Path Resolution Order
//!
//! 1. `FINCAST_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/fincast` or `~/.config/fincast`
//! 3. Windows: `%APPDATA%\fincast`

use std::path::PathBuf;

use crate::error::FincastError;

/// Manages all paths used by fincast
#[derive(Debug, Clone)]
pub struct FincastPaths {
    /// Base directory for all fincast data
    base_dir: PathBuf,
}

impl FincastPaths {
    /// Create a new FincastPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FincastError> {
        let base_dir = if let Ok(custom) = std::env::var("FINCAST_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FincastPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/fincast/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the config directory (same as base for simplicity)
    pub fn config_dir(&self) -> PathBuf {
        self.base_dir.clone()
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), FincastError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FincastError::Io(format!("Failed to create base directory: {}", e)))?;

        Ok(())
    }

    /// Check if fincast has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, FincastError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });

    Ok(config_base.join("fincast"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, FincastError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FincastError::Config("APPDATA environment variable not set".to_string()))?;

    Ok(PathBuf::from(appdata).join("fincast"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_with_base_dir() {
        let paths = FincastPaths::with_base_dir(PathBuf::from("/tmp/fincast-test"));
        assert_eq!(paths.base_dir(), &PathBuf::from("/tmp/fincast-test"));
        assert_eq!(
            paths.settings_file(),
            PathBuf::from("/tmp/fincast-test/config.json")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FincastPaths::with_base_dir(temp_dir.path().join("nested"));

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }
}

//! User configuration and preferences

use crate::error::{CardSwipeError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UserConfig {
    /// Whether the welcome dialog has been shown
    #[serde(default)]
    pub welcome_shown: bool,
}

impl UserConfig {
    /// Get the config file path (~/.config/cardswipe/config.json)
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cardswipe").join("config.json"))
    }

    /// Load config from the default location, or defaults if it doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path().ok_or_else(|| {
            CardSwipeError::ConfigError("Could not determine config directory".to_string())
        })?;
        Self::load_from(&path)
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| {
            CardSwipeError::ConfigError(format!("Failed to read config file: {}", e))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            CardSwipeError::ConfigError(format!("Failed to parse config file: {}", e))
        })
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().ok_or_else(|| {
            CardSwipeError::ConfigError("Could not determine config directory".to_string())
        })?;
        self.save_to(&path)
    }

    /// Records that the welcome dialog was seen and persists it to `path`.
    ///
    /// The in-memory flag is set even when the write fails.
    pub fn mark_welcome_shown(&mut self, path: &Path) -> Result<()> {
        self.welcome_shown = true;
        self.save_to(path)
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CardSwipeError::ConfigError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            CardSwipeError::ConfigError(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, contents).map_err(|e| {
            CardSwipeError::ConfigError(format!("Failed to write config file: {}", e))
        })?;

        log::debug!("event=config_saved path={}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = UserConfig::default();
        assert!(!config.welcome_shown);
    }

    #[test]
    fn test_config_serialization() {
        let config = UserConfig {
            welcome_shown: true,
        };
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: UserConfig = serde_json::from_str(&json).unwrap();
        assert!(deserialized.welcome_shown);
    }

    #[test]
    fn test_missing_field_defaults() {
        let config: UserConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, UserConfig::default());
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");

        let config = UserConfig::load_from(&path).unwrap();
        assert!(!config.welcome_shown);
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.json");

        let config = UserConfig {
            welcome_shown: true,
        };
        config.save_to(&path).unwrap();
        assert!(path.exists());

        let loaded = UserConfig::load_from(&path).unwrap();
        assert!(loaded.welcome_shown);
    }

    #[test]
    fn test_mark_welcome_shown_persists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");

        let mut config = UserConfig::default();
        config.mark_welcome_shown(&path).unwrap();

        assert!(config.welcome_shown);
        assert!(UserConfig::load_from(&path).unwrap().welcome_shown);
    }

    #[test]
    fn test_mark_welcome_shown_reports_write_failure() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not_a_dir");
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("config.json");

        let mut config = UserConfig::default();
        let result = config.mark_welcome_shown(&path);

        assert!(matches!(result, Err(CardSwipeError::ConfigError(_))));
        assert!(config.welcome_shown);
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        let result = UserConfig::load_from(&path);
        assert!(matches!(result, Err(CardSwipeError::ConfigError(_))));
    }
}

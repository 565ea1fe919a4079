use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::i18n::Locale;

const DEFAULT_FILTER: &str = "*.png";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub last_directory: Option<String>,
    pub file_filter: String,
    pub locale: Locale,
    pub last_source: Option<String>,
    pub flatten_fill: [u8; 3],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            last_directory: None,
            file_filter: DEFAULT_FILTER.to_string(),
            locale: Locale::default(),
            last_source: None,
            flatten_fill: [0, 0, 0],
        }
    }
}

impl AppConfig {
    /// `<config dir>/BuildIconizer/config.json`, or the working directory
    /// when the platform has no config dir.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("BuildIconizer")
            .join("config.json")
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Falls back to defaults when the file is missing or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!("ℹ️ Config file does not exist at: {}", path.display());
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => {
                log::info!("✅ Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("❌ Failed to load config from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::debug!("💾 Saved config to {}", path.display());
        Ok(())
    }

    pub fn last_directory_path(&self) -> Option<PathBuf> {
        self.last_directory.as_ref().map(PathBuf::from)
    }

    pub fn last_source_path(&self) -> Option<PathBuf> {
        self.last_source.as_ref().map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = AppConfig {
            last_directory: Some("/tmp/icons".to_string()),
            file_filter: "*.jpg".to_string(),
            locale: Locale::English,
            last_source: Some("/tmp/logo.png".to_string()),
            flatten_fill: [255, 255, 255],
        };

        config.save(&path).unwrap();

        assert_eq!(AppConfig::load(&path).unwrap(), config);
        assert_eq!(config.last_directory_path(), Some(PathBuf::from("/tmp/icons")));
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "locale": "English" }"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.locale, Locale::English);
        assert_eq!(config.file_filter, DEFAULT_FILTER);
        assert_eq!(config.flatten_fill, [0, 0, 0]);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(AppConfig::load(&path), Err(ConfigError::Json(_))));
        assert_eq!(AppConfig::load_or_default(&path), AppConfig::default());
        assert_eq!(
            AppConfig::load_or_default(&dir.path().join("absent.json")),
            AppConfig::default()
        );
    }
}

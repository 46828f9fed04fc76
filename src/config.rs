//! Configuration management for voicetask.
//!
//! This module handles the `.voicetask/config.yaml` file which stores
//! per-directory settings. Everything is defaulted; the file only needs to
//! exist when a default is being overridden.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Data directory relative to the base directory.
pub const DATA_DIR: &str = ".voicetask";

/// Config file path relative to the base directory.
pub const CONFIG_FILE_PATH: &str = ".voicetask/config.yaml";

/// The single supported capture locale.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Capture locale tag. Recorded but fixed: only one variant is
    /// supported and nothing is localized.
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Whether to append handled transcripts to the session event log.
    #[serde(default)]
    pub debug_logging: bool,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { locale: default_locale(), debug_logging: false }
    }
}

impl AppConfig {
    /// Load config from the default location, returning None if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load() -> Result<Option<Self>> {
        Self::load_from(Path::new("."))
    }

    /// Load config from a specific base directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load_from(base_dir: &Path) -> Result<Option<Self>> {
        let config_path = base_dir.join(CONFIG_FILE_PATH);
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(Some(config))
    }

    /// Save config to a specific base directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, base_dir: &Path) -> Result<()> {
        let config_path = base_dir.join(CONFIG_FILE_PATH);

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// Get the config file path for a base directory.
    #[must_use]
    pub fn config_path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE_PATH)
    }
}

/// Get the data directory for a base directory.
#[must_use]
pub fn data_dir(base_dir: &Path) -> PathBuf {
    base_dir.join(DATA_DIR)
}

/// Load the config if present, otherwise create it with defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or created.
pub fn ensure_config(base_dir: &Path) -> Result<AppConfig> {
    if let Some(config) = AppConfig::load_from(base_dir)? {
        return Ok(config);
    }

    let config = AppConfig::default();
    config.save_to(base_dir)?;
    Ok(config)
}

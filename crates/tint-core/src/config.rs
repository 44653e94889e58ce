//! Configuration management for tint
//!
//! Handles loading and validation of tint.toml configuration files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// Notice settings
    #[serde(default)]
    pub notify: NotifyConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Data directory override. When unset, resolves to the platform data
    /// dir (e.g. `~/.local/share/tint`).
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            data_dir: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Notice configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// Auto-dismiss duration in milliseconds
    #[serde(default = "default_dismiss_ms")]
    pub dismiss_ms: u64,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            dismiss_ms: default_dismiss_ms(),
        }
    }
}

fn default_dismiss_ms() -> u64 {
    2500
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Default palette name stamped into export documents
    #[serde(default = "default_export_name")]
    pub name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            name: default_export_name(),
        }
    }
}

fn default_export_name() -> String {
    "My Palette".to_string()
}

impl Config {
    /// Load configuration from `<data_dir>/tint.toml`, falling back to
    /// defaults when the file does not exist.
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadFailed(path.display().to_string(), e.to_string()))?;
        let config =
            toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Ok(config)
    }

    /// Resolve the data directory: explicit config value, else the platform
    /// data dir under a `tint` namespace.
    pub fn data_dir(&self) -> crate::Result<PathBuf> {
        if let Some(dir) = &self.general.data_dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|d| d.join("tint"))
            .ok_or_else(|| ConfigError::NoDataDir.into())
    }
}

//! Configuration file loading and parsing
//!
//! Loads configuration from `~/.config/linkdeck/config.toml`

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Main configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// General settings
    pub general: GeneralConfig,
    /// Where bookmarks live
    pub storage: StorageConfig,
}

/// General application settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Show the clock in the status bar
    pub show_clock: bool,
    /// Clock refresh interval in seconds
    pub clock_interval_secs: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            show_clock: true,
            clock_interval_secs: 60,
        }
    }
}

/// Storage locations
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Data directory holding `bookmarks.json` and `theme`
    pub data_dir: Option<PathBuf>,
    /// JSON file replacing the built-in default bookmarks
    pub defaults_path: Option<PathBuf>,
}

impl ConfigFile {
    /// Get the config directory path
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("linkdeck"))
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Load configuration from the default location.
    /// Returns default config if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| Self::load_from(&path).ok())
            .unwrap_or_default()
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ConfigFile = toml::from_str(&content)?;
        Ok(config)
    }
}

//! Paxfinder configuration file handling
//!
//! Loads and manages the ~/.config/paxfinder/config.yaml file.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Key the whole record mapping is stored under
pub const DEFAULT_STATE_KEY: &str = "peopleData";

/// Directory holding config and state (~/.config/paxfinder)
pub fn config_dir() -> PathBuf {
    // Always use ~/.config for consistency across platforms (macOS, Linux)
    let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(".config");
    path.push("paxfinder");
    path
}

/// State storage settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path to the SQLite state database
    #[serde(default = "default_state_path")]
    pub path: PathBuf,

    /// Key holding the serialized record mapping
    #[serde(default = "default_state_key")]
    pub state_key: String,

    /// Enable SQLite WAL journaling
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

fn default_state_path() -> PathBuf {
    config_dir().join("state.db")
}

fn default_state_key() -> String {
    DEFAULT_STATE_KEY.to_string()
}

fn default_wal_mode() -> bool {
    true
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_state_path(),
            state_key: default_state_key(),
            wal_mode: default_wal_mode(),
        }
    }
}

/// Terminal display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Colorize output
    #[serde(default = "default_color")]
    pub color: bool,

    /// Show number/group/class/other under each passenger
    #[serde(default)]
    pub expanded: bool,
}

fn default_color() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            expanded: false,
        }
    }
}

/// Paxfinder configuration
///
/// Represents the complete ~/.config/paxfinder/config.yaml file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaxfinderConfig {
    /// State storage settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// Display settings
    #[serde(default)]
    pub display: DisplayConfig,
}

impl PaxfinderConfig {
    /// Create a configuration with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from the default path (~/.config/paxfinder/config.yaml)
    pub fn load_default() -> Result<Self> {
        Self::load_or_default(Self::default_path())
    }

    /// Load configuration from a specific path
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(crate::PaxError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        tracing::info!(path = %path.display(), "Loading Paxfinder configuration");

        let content = fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;

        tracing::debug!(
            state_db = %config.storage.path.display(),
            state_key = %config.storage.state_key,
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is missing
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to a specific path
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        tracing::info!(path = %path.display(), "Saving Paxfinder configuration");

        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;

        Ok(())
    }

    /// Get the default config path (~/.config/paxfinder/config.yaml)
    pub fn default_path() -> PathBuf {
        config_dir().join("config.yaml")
    }
}

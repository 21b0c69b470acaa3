//! Configuration management for the application.
//!
//! This module handles loading and saving the optional TOML configuration
//! that overrides the default output directories.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    APP_CONFIG_DIR_NAME, CONFIG_DIR_ENV, DEFAULT_ASSETS_DIR, DEFAULT_SCAFFOLD_DIR,
};

/// Output locations used by the generators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathConfig {
    /// Base directory for the Swift package scaffold.
    #[serde(default = "default_scaffold_dir")]
    pub scaffold_dir: PathBuf,
    /// Asset catalog folder for generated colorsets.
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
    /// Palette JSON to use instead of the built-in colors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<PathBuf>,
}

fn default_scaffold_dir() -> PathBuf {
    PathBuf::from(DEFAULT_SCAFFOLD_DIR)
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from(DEFAULT_ASSETS_DIR)
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            scaffold_dir: default_scaffold_dir(),
            assets_dir: default_assets_dir(),
            palette: None,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Output locations.
    #[serde(default)]
    pub paths: PathConfig,
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// Uses `$CVGEN_CONFIG_DIR` when set, otherwise:
    /// - Linux: `~/.config/cvgen/`
    /// - macOS: `~/Library/Application Support/cvgen/`
    /// - Windows: `%APPDATA%\cvgen\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path, defaulting when it is absent.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Saves configuration to `config_path`, creating its directory.
    ///
    /// Writes to a temp file first and renames it into place.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(dir) = config_path.parent() {
            fs::create_dir_all(dir).context(format!(
                "Failed to create config directory: {}",
                dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }
}

//! Configuration management.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::fallback::DEFAULT_FALLBACK_PATH;

/// Main configuration structure, stored as TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

/// Clipboard behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipboardConfig {
    /// Force a specific utility (wl-copy, xclip, xsel). The command-line
    /// flag takes precedence when both are given.
    #[serde(default)]
    pub preferred_tool: Option<String>,
    /// Where the read path looks when no live transport exists.
    #[serde(default = "default_fallback_file")]
    pub fallback_file: String,
}

fn default_fallback_file() -> String {
    DEFAULT_FALLBACK_PATH.to_string()
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            preferred_tool: None,
            fallback_file: default_fallback_file(),
        }
    }
}

impl Config {
    /// Get the config file path (~/.config/clipway/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".config").join("clipway").join("config.toml"))
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }
}

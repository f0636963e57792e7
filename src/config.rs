//! Configuration management for showroom
//!
//! Stores settings in ~/.config/showroom/config.json. The environment
//! variable `SHOWROOM_API_KEY` takes precedence over the file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable consulted before the config file.
pub const API_KEY_ENV: &str = "SHOWROOM_API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// API key for the recommendation service.
    pub advisor_api_key: Option<String>,
}

impl Config {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("showroom"))
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.json"))
    }

    /// Load config from disk, or return default
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub(crate) fn load_from(path: &Path) -> Self {
        if let Ok(content) = fs::read_to_string(path) {
            match serde_json::from_str(&content) {
                Ok(config) => return config,
                Err(err) => {
                    eprintln!(
                        "  Warning: config file was corrupted ({}); defaults were loaded.",
                        err
                    );
                }
            }
        }
        Self::default()
    }

    /// Save config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("could not determine config directory"))?;
        fs::create_dir_all(&dir)?;
        self.save_to(&dir.join("config.json"))
    }

    pub(crate) fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// The advisor API key: environment first, then the config file. Blank
    /// values count as unset.
    pub fn advisor_api_key(&self) -> Option<String> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| {
                self.advisor_api_key
                    .clone()
                    .filter(|k| !k.trim().is_empty())
            })
    }
}

//! Configuration management for lane.
//!
//! Configuration is loaded from multiple sources with precedence:
//! 1. Environment variables (LANE_*)
//! 2. Config file ($LANE_CONFIG or the platform config dir)
//! 3. Default values

use anyhow::{Context, Result};
use directories::ProjectDirs;
use lane_core::TimelineConfig;
use lane_core::export::DEFAULT_PREFIX;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Decades, initial state, music and celebration settings
    #[serde(default)]
    pub timeline: TimelineConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory exports are written to
    #[serde(default = "default_export_dir")]
    pub dir: PathBuf,

    /// File name prefix, followed by the export date
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

fn default_export_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

fn default_file_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

fn default_config_dir() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("dev", "memory-lane", "lane") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".memory-lane")
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: default_export_dir(),
            file_prefix: default_file_prefix(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path())?;
        config.apply_env(|key| std::env::var(key).ok());
        config
            .timeline
            .validate()
            .context("Invalid timeline configuration")?;
        Ok(config)
    }

    /// Load from a specific file, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Apply LANE_* overrides using the given variable lookup.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("LANE_DARK_MODE") {
            self.timeline.dark_mode = matches!(value.as_str(), "1" | "true" | "yes" | "on");
        }
        if let Some(value) = lookup("LANE_EXPORT_DIR") {
            self.export.dir = PathBuf::from(value);
        }
    }

    /// Get the config file path.
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var("LANE_CONFIG") {
            PathBuf::from(path)
        } else {
            default_config_dir().join("config.toml")
        }
    }
}

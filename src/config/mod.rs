// ABOUTME: Configuration management for the Caprae terminal client
// Loads start path, UI preferences and toast lifetimes from TOML files with defaults

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::notify::NotificationType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    #[serde(default = "default_version")]
    pub version: String,

    /// Path opened when the TUI starts
    #[serde(default = "default_start_path")]
    pub start_path: String,

    /// UI preferences
    #[serde(default)]
    pub ui: UiPreferences,

    /// How long each kind of toast stays on screen
    #[serde(default)]
    pub notifications: NotificationConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Show labels next to sidebar icons
    #[serde(default = "default_true")]
    pub sidebar_labels: bool,

    /// Redraw interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            sidebar_labels: default_true(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_success_secs")]
    pub success_secs: u64,
    #[serde(default = "default_info_secs")]
    pub info_secs: u64,
    #[serde(default = "default_warning_secs")]
    pub warning_secs: u64,
    #[serde(default = "default_error_secs")]
    pub error_secs: u64,
}

impl NotificationConfig {
    pub fn lifetime(&self, kind: NotificationType) -> Duration {
        let secs = match kind {
            NotificationType::Success => self.success_secs,
            NotificationType::Info => self.info_secs,
            NotificationType::Warning => self.warning_secs,
            NotificationType::Error => self.error_secs,
        };
        Duration::from_secs(secs)
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            success_secs: default_success_secs(),
            info_secs: default_info_secs(),
            warning_secs: default_warning_secs(),
            error_secs: default_error_secs(),
        }
    }
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_start_path() -> String {
    "/".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_success_secs() -> u64 {
    3
}

fn default_info_secs() -> u64 {
    3
}

fn default_warning_secs() -> u64 {
    4
}

fn default_error_secs() -> u64 {
    5
}

impl AppConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        // Lowest precedence first
        for path in Self::get_config_paths() {
            if let Some(file_config) = Self::load_from(&path)? {
                config.merge(file_config);
            }
        }

        Ok(config)
    }

    /// Read a single config file, if it exists
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        Ok(Some(config))
    }

    /// Get configuration file paths, lowest precedence first
    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        // 1. User config (~/.caprae/config/config.toml)
        if let Ok(config_dir) = Self::get_user_config_dir() {
            paths.push(config_dir.join("config.toml"));
        }

        // 2. Local project config
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(".caprae").join("config.toml"));
        }

        paths
    }

    /// Get user configuration directory
    fn get_user_config_dir() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("config"))
    }

    /// Base directory for config and logs (~/.caprae)
    pub fn base_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home_dir.join(".caprae"))
    }

    /// Merge another config into this one; values left at their defaults don't override
    fn merge(&mut self, other: AppConfig) {
        if other.start_path != default_start_path() {
            self.start_path = other.start_path;
        }

        if other.ui.sidebar_labels != default_true() {
            self.ui.sidebar_labels = other.ui.sidebar_labels;
        }
        if other.ui.tick_rate_ms != default_tick_rate_ms() {
            self.ui.tick_rate_ms = other.ui.tick_rate_ms;
        }

        let defaults = NotificationConfig::default();
        if other.notifications.success_secs != defaults.success_secs {
            self.notifications.success_secs = other.notifications.success_secs;
        }
        if other.notifications.info_secs != defaults.info_secs {
            self.notifications.info_secs = other.notifications.info_secs;
        }
        if other.notifications.warning_secs != defaults.warning_secs {
            self.notifications.warning_secs = other.notifications.warning_secs;
        }
        if other.notifications.error_secs != defaults.error_secs {
            self.notifications.error_secs = other.notifications.error_secs;
        }
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms.max(10))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            start_path: default_start_path(),
            ui: UiPreferences::default(),
            notifications: NotificationConfig::default(),
        }
    }
}

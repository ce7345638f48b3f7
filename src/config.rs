//! Configuration handling for the TUI

use crate::state::wizard::ValidationScope;
use crate::state::DEFAULT_TOAST_DURATION;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    /// How long toasts stay on screen, in milliseconds
    pub toast_duration_ms: Option<u64>,
    /// Directory offered by the document picker
    pub documents_dir: Option<PathBuf>,
    /// Which fields gate a step transition
    pub validation_scope: Option<ValidationScope>,
    /// Play the entrance animation when a screen is shown
    pub entrance_animation: Option<bool>,
}

impl AppConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, defaulting when the file is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to the default location
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn toast_duration(&self) -> Duration {
        self.toast_duration_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TOAST_DURATION)
    }

    pub fn validation_scope(&self) -> ValidationScope {
        self.validation_scope.unwrap_or_default()
    }

    pub fn entrance_animation(&self) -> bool {
        self.entrance_animation.unwrap_or(true)
    }
}

pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "onboard", "onboard-tui")
}

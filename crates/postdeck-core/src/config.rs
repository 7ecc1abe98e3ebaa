//! PostDeck configuration system.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{PostdeckError, Result};

/// Tunables for the dashboard core. All values have sensible defaults, so an
/// absent config file is not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Forward window (in calendar days) within which a scheduled post
    /// counts as "upcoming" for notifications.
    #[serde(default = "default_horizon_days")]
    pub horizon_days: i64,
    /// Maximum entries in the dashboard's upcoming-posts list.
    #[serde(default = "default_upcoming_limit")]
    pub upcoming_limit: usize,
    /// Maximum characters of post content shown in previews.
    #[serde(default = "default_preview_max_chars")]
    pub preview_max_chars: usize,
}

fn default_horizon_days() -> i64 { 3 }
fn default_upcoming_limit() -> usize { 10 }
fn default_preview_max_chars() -> usize { 50 }

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            horizon_days: default_horizon_days(),
            upcoming_limit: default_upcoming_limit(),
            preview_max_chars: default_preview_max_chars(),
        }
    }
}

impl DashboardConfig {
    /// Load config from the default path (~/.postdeck/config.toml).
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PostdeckError::Config(format!("Failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| PostdeckError::Config(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    /// Save config to the default path.
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| PostdeckError::Config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Get the default config path.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".postdeck")
            .join("config.toml")
    }
}

// Application configuration
// Optional config.toml read from the platform config directory

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::services::storage::project_dirs;

const CONFIG_FILE: &str = "config.toml";

/// User-editable application configuration. Every field is optional; a
/// missing file yields the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Overrides the platform data directory holding the database and the
    /// journal.
    pub data_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Loads the configuration from the platform config directory.
    pub fn load() -> Result<Self> {
        let Some(dirs) = project_dirs() else {
            log::warn!("No platform config directory available, using defaults");
            return Ok(Self::default());
        };

        Self::load_from(&dirs.config_dir().join(CONFIG_FILE))
    }

    /// Loads the configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = toml::from_str(&data)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Ok(config)
    }
}

//! Resolution of the application-private storage locations.
//!
//! Built once at process start and passed to the components that persist
//! data, instead of each component reaching for platform paths on its own.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::config::AppConfig;

const DATABASE_FILE: &str = "daybook.db";
const LEGACY_SNAPSHOT_FILE: &str = "preferences.json";
const JOURNAL_DIR: &str = "journal";

/// Returns the platform directories for this application.
pub(crate) fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "daybook", "Daybook")
}

/// Locations of the preference database and the journal directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePaths {
    pub database_path: PathBuf,
    pub journal_dir: PathBuf,
}

impl StoragePaths {
    /// Resolves storage under the platform data directory, honoring the
    /// configured override when one is set.
    pub fn resolve(config: &AppConfig) -> Result<Self> {
        if let Some(dir) = &config.data_dir {
            return Ok(Self::at(dir));
        }

        let dirs = project_dirs().context("Failed to resolve platform application directories")?;
        Ok(Self::at(dirs.data_dir()))
    }

    /// Roots both locations under an arbitrary directory.
    pub fn at(root: &Path) -> Self {
        Self {
            database_path: root.join(DATABASE_FILE),
            journal_dir: root.join(JOURNAL_DIR),
        }
    }

    /// Location of the legacy preference snapshot, next to the database.
    pub fn legacy_snapshot_path(&self) -> PathBuf {
        self.database_path.with_file_name(LEGACY_SNAPSHOT_FILE)
    }

    /// Creates the directory tree both stores live in.
    pub fn ensure_dirs(&self) -> Result<()> {
        if let Some(parent) = self.database_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {}", parent.display()))?;
        }
        std::fs::create_dir_all(&self.journal_dir).with_context(|| {
            format!(
                "Failed to create journal directory {}",
                self.journal_dir.display()
            )
        })?;
        Ok(())
    }
}

//! One-time import of the legacy JSON preference snapshot.
//!
//! Earlier builds persisted preferences as a small JSON file next to the
//! database. The snapshot is folded into the preference row once, then the
//! file is renamed so the import never repeats.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::preferences::snap_font_size;
use crate::services::database::Database;

use super::service::PreferenceService;

/// Wire shape of the legacy snapshot file. Absent fields keep whatever the
/// database already holds.
#[derive(Debug, Deserialize)]
struct LegacySnapshot {
    dark_mode: Option<bool>,
    font_size: Option<u32>,
}

/// Migrate a legacy preference snapshot into the database.
/// Call this once during app startup; returns whether a snapshot was found.
pub fn migrate_legacy_snapshot(json_path: &Path, db: &Database) -> Result<bool> {
    if !json_path.exists() {
        log::info!("No legacy preference snapshot to migrate");
        return Ok(false);
    }

    log::info!(
        "Migrating preferences from {} to database...",
        json_path.display()
    );

    let data = fs::read_to_string(json_path)
        .with_context(|| format!("Failed to read legacy snapshot {}", json_path.display()))?;
    let snapshot: LegacySnapshot = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse legacy snapshot {}", json_path.display()))?;

    let service = PreferenceService::new(db);
    if let Some(dark_mode) = snapshot.dark_mode {
        service.set_dark_mode(dark_mode)?;
    }
    if let Some(font_size) = snapshot.font_size {
        // Old builds never clamped the slider value before writing it out.
        service.set_font_size(snap_font_size(font_size))?;
    }

    // Rename the JSON file to indicate migration completed
    let backup_path = json_path.with_extension("json.migrated");
    if let Err(e) = fs::rename(json_path, &backup_path) {
        log::warn!(
            "Failed to rename migrated snapshot: {}. Please delete {} manually.",
            e,
            json_path.display()
        );
    } else {
        log::info!("Renamed migrated snapshot to {}", backup_path.display());
    }

    Ok(true)
}

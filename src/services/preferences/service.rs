use crate::models::preferences::{validate_font_size, Preferences};
use crate::services::database::Database;
use anyhow::{anyhow, Context, Result};

use super::mapper::row_to_preferences;

/// Synchronous persistence for the single preference row.
///
/// Each setter is an atomic merge-update: only the named column is
/// rewritten, so independent updates to different fields cannot clobber
/// each other.
pub struct PreferenceService<'a> {
    db: &'a Database,
}

impl<'a> PreferenceService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Get the current preference set
    pub fn get(&self) -> Result<Preferences> {
        let conn = self.db.connection();

        let preferences = conn
            .query_row(
                "SELECT dark_mode, font_size FROM preferences WHERE id = 1",
                [],
                |row| row_to_preferences(row),
            )
            .context("Failed to load preferences")?;

        Ok(preferences)
    }

    /// Replace the whole preference set
    pub fn update(&self, preferences: &Preferences) -> Result<()> {
        preferences
            .validate()
            .map_err(|e| anyhow!("Invalid preferences: {}", e))?;

        let conn = self.db.connection();

        conn.execute(
            "UPDATE preferences \
             SET dark_mode = ?1, \
                 font_size = ?2, \
                 updated_at = CURRENT_TIMESTAMP \
             WHERE id = 1",
            (preferences.dark_mode as i32, preferences.font_size),
        )
        .context("Failed to update preferences")?;

        Ok(())
    }

    /// Set the dark-mode flag; the font size column is left untouched.
    pub fn set_dark_mode(&self, enabled: bool) -> Result<()> {
        let conn = self.db.connection();

        conn.execute(
            "UPDATE preferences SET dark_mode = ?1, updated_at = CURRENT_TIMESTAMP WHERE id = 1",
            (enabled as i32,),
        )
        .context("Failed to update dark mode")?;

        Ok(())
    }

    /// Set the font size; the dark-mode column is left untouched.
    pub fn set_font_size(&self, size: u32) -> Result<()> {
        validate_font_size(size).map_err(|e| anyhow!("Invalid preferences: {}", e))?;

        let conn = self.db.connection();

        conn.execute(
            "UPDATE preferences SET font_size = ?1, updated_at = CURRENT_TIMESTAMP WHERE id = 1",
            (size,),
        )
        .context("Failed to update font size")?;

        Ok(())
    }

    /// Reset preferences to defaults
    pub fn reset(&self) -> Result<()> {
        let default_preferences = Preferences::default();
        self.update(&default_preferences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::database::Database;

    fn setup_test_db() -> Database {
        let db = Database::new(":memory:").unwrap();
        db.initialize_schema().unwrap();
        db
    }

    #[test]
    fn test_get_default_preferences() {
        let db = setup_test_db();
        let service = PreferenceService::new(&db);

        let preferences = service.get().unwrap();
        assert!(!preferences.dark_mode);
        assert_eq!(preferences.font_size, 16);
    }

    #[test]
    fn test_update_preferences() {
        let db = setup_test_db();
        let service = PreferenceService::new(&db);

        let mut preferences = service.get().unwrap();
        preferences.dark_mode = true;
        preferences.font_size = 24;

        service.update(&preferences).unwrap();

        let updated = service.get().unwrap();
        assert!(updated.dark_mode);
        assert_eq!(updated.font_size, 24);
    }

    #[test]
    fn test_update_rejects_invalid_font_size() {
        let db = setup_test_db();
        let service = PreferenceService::new(&db);

        let mut preferences = service.get().unwrap();
        preferences.font_size = 15;

        assert!(service.update(&preferences).is_err());
        assert!(service.set_font_size(50).is_err());
    }

    #[test]
    fn test_set_dark_mode_leaves_font_size_untouched() {
        let db = setup_test_db();
        let service = PreferenceService::new(&db);

        service.set_font_size(30).unwrap();
        service.set_dark_mode(true).unwrap();
        service.set_dark_mode(false).unwrap();

        let preferences = service.get().unwrap();
        assert!(!preferences.dark_mode);
        assert_eq!(preferences.font_size, 30);
    }

    #[test]
    fn test_set_font_size_leaves_dark_mode_untouched() {
        let db = setup_test_db();
        let service = PreferenceService::new(&db);

        service.set_dark_mode(true).unwrap();
        service.set_font_size(20).unwrap();

        let preferences = service.get().unwrap();
        assert!(preferences.dark_mode);
        assert_eq!(preferences.font_size, 20);
    }

    #[test]
    fn test_every_valid_font_size_round_trips() {
        let db = setup_test_db();
        let service = PreferenceService::new(&db);

        for size in (16..=48).step_by(2) {
            service.set_font_size(size).unwrap();
            assert_eq!(service.get().unwrap().font_size, size);
        }
    }

    #[test]
    fn test_reset_preferences() {
        let db = setup_test_db();
        let service = PreferenceService::new(&db);

        let mut preferences = service.get().unwrap();
        preferences.dark_mode = true;
        preferences.font_size = 40;
        service.update(&preferences).unwrap();

        service.reset().unwrap();

        let reset = service.get().unwrap();
        assert_eq!(reset, Preferences::default());
    }
}

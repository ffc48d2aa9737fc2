use anyhow::{Context, Result};
use rusqlite::Connection;

use super::migrations;

pub fn initialize_schema(conn: &Connection) -> Result<()> {
    create_preferences_table(conn)?;
    run_preference_migrations(conn)?;
    insert_default_preferences(conn)?;
    Ok(())
}

fn create_preferences_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS preferences (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            dark_mode INTEGER NOT NULL DEFAULT 0,
            font_size INTEGER NOT NULL DEFAULT 16,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )
    .context("Failed to create preferences table")?;

    Ok(())
}

fn run_preference_migrations(conn: &Connection) -> Result<()> {
    // font_size arrived after the first shipped schema; databases created
    // by older builds only carry the dark_mode column.
    migrations::ensure_column(
        conn,
        "preferences",
        "font_size",
        "ALTER TABLE preferences ADD COLUMN font_size INTEGER NOT NULL DEFAULT 16",
    )?;

    Ok(())
}

fn insert_default_preferences(conn: &Connection) -> Result<()> {
    conn.execute(
        "INSERT OR IGNORE INTO preferences (id, dark_mode, font_size) VALUES (1, 0, 16)",
        [],
    )
    .context("Failed to insert default preferences")?;

    Ok(())
}

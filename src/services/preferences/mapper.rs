use crate::models::preferences::Preferences;
use rusqlite::Row;

pub fn row_to_preferences(row: &Row) -> Result<Preferences, rusqlite::Error> {
    Ok(Preferences {
        dark_mode: row.get::<_, i32>(0)? != 0,
        font_size: row.get(1)?,
    })
}

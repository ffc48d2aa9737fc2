use anyhow::{Context, Result};
use rusqlite::Connection;

/// Reports whether a table already carries a column.
fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let count: i64 = conn
        .query_row(
            &format!("SELECT COUNT(*) FROM pragma_table_info('{table}') WHERE name = ?1"),
            [column],
            |row| row.get(0),
        )
        .with_context(|| format!("Failed to inspect columns of {table}"))?;

    Ok(count > 0)
}

/// Applies an ALTER TABLE statement unless the column is already present.
pub fn ensure_column(conn: &Connection, table: &str, column: &str, ddl: &str) -> Result<()> {
    if column_exists(conn, table, column)? {
        return Ok(());
    }

    log::info!("Adding column {}.{}", table, column);
    conn.execute(ddl, [])
        .with_context(|| format!("Failed to add column {} to {}", column, table))?;

    Ok(())
}

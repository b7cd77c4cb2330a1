//! Album table schema.
//!
//! # Invariants
//! - Applying the schema twice is a no-op.
//! - `artist` and `title` are `NOT NULL`; storage rejects incomplete rows.

use crate::db::{DbError, DbResult};
use rusqlite::Connection;

/// Version stamped into `PRAGMA user_version` once the schema is present.
pub const SCHEMA_VERSION: u32 = 1;

const ALBUM_SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS album (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    artist TEXT NOT NULL,
    title TEXT NOT NULL
);";

/// Creates the album table on `conn` when it is missing.
pub fn apply_schema(conn: &Connection) -> DbResult<()> {
    let current_version = current_user_version(conn)?;
    if current_version > SCHEMA_VERSION {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current_version,
            latest_supported: SCHEMA_VERSION,
        });
    }

    conn.execute_batch(ALBUM_SCHEMA_SQL)?;
    if current_version < SCHEMA_VERSION {
        conn.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
    }

    Ok(())
}

/// Reads `PRAGMA user_version` from `conn`.
pub fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}

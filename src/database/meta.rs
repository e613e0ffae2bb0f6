//! Store-level flags kept in the `meta` table.
//!
//! Values here describe the store itself, not user data, so export, import
//! and clear-all never touch them.

use rusqlite::{params, Connection, OptionalExtension};

use crate::types::errors::Result;

/// Set once the first-run routine has completed for this store.
pub const INITIALIZED_KEY: &str = "initialized_at";

pub fn get(conn: &Connection, key: &str) -> Result<Option<String>> {
    Ok(conn
        .query_row("SELECT value FROM meta WHERE key = ?1", params![key], |row| {
            row.get(0)
        })
        .optional()?)
}

pub fn set(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO meta (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )?;
    Ok(())
}

//! Schema migrations for the TabDesk SQLite database.
//!
//! Migrations are listed in [`MIGRATIONS`] in version order. Applied versions
//! are recorded in `schema_version`, so reopening a store is a no-op.

use rusqlite::{params, Connection};

use super::clock;

/// Current schema version. Bump this when adding a new migration.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

struct Migration {
    version: i32,
    description: &'static str,
    sql: &'static str,
}

/// `links.folder_id` has no FOREIGN KEY clause; the folder manager removes a
/// folder's links itself.
const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        description: "folders, links, shortcuts and store metadata",
        sql: "
        CREATE TABLE IF NOT EXISTS folders (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            is_open INTEGER NOT NULL DEFAULT 0,
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS links (
            id TEXT PRIMARY KEY,
            folder_id TEXT NOT NULL,
            name TEXT NOT NULL,
            url TEXT NOT NULL,
            favicon TEXT,
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS shortcuts (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            url TEXT NOT NULL,
            favicon TEXT,
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_links_folder_id ON links(folder_id);
        CREATE INDEX IF NOT EXISTS idx_links_created_at ON links(created_at);
        CREATE INDEX IF NOT EXISTS idx_folders_created_at ON folders(created_at);
        CREATE INDEX IF NOT EXISTS idx_shortcuts_created_at ON shortcuts(created_at);

        CREATE TABLE IF NOT EXISTS meta (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
    ",
    },
];

/// Highest applied version, 0 for a fresh file.
///
/// Expects the `schema_version` table to exist; [`run_all`] creates it.
pub fn get_schema_version(conn: &Connection) -> Result<i32, rusqlite::Error> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
}

/// Applies every migration newer than the recorded version.
///
/// # Errors
/// Returns `rusqlite::Error` if any SQL statement fails.
pub fn run_all(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
             version INTEGER PRIMARY KEY,
             applied_at INTEGER NOT NULL,
             description TEXT NOT NULL
         );",
    )?;

    let current = get_schema_version(conn)?;
    for migration in MIGRATIONS.iter().filter(|m| m.version > current) {
        conn.execute_batch(migration.sql)?;
        conn.execute(
            "INSERT OR IGNORE INTO schema_version (version, applied_at, description)
             VALUES (?1, ?2, ?3)",
            params![
                migration.version,
                clock::to_micros(clock::now()),
                migration.description
            ],
        )?;
        tracing::info!(
            version = migration.version,
            description = migration.description,
            "applied schema migration"
        );
    }
    Ok(())
}

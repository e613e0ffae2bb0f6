//! SQLite database connection management for TabDesk.
//!
//! Provides the [`Database`] struct that wraps a `rusqlite::Connection`
//! and automatically runs schema migrations on open.

use rusqlite::Connection;
use std::path::Path;

use super::migrations;
use crate::types::errors::{DashboardError, Result};

/// Owned handle to the dashboard store.
///
/// Open it once at startup, hand `connection()` to the managers, and
/// `close()` it at shutdown. Tests use [`Database::open_in_memory`] for an
/// isolated store per case.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens (or creates) a SQLite database at the given file path and runs migrations.
    ///
    /// # Errors
    /// Returns `DashboardError::Storage` if the file cannot be opened or migrations fail.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    DashboardError::Storage(format!(
                        "Failed to create database directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode = WAL;")?;
        let db = Self { conn };
        db.run_migrations()?;
        tracing::debug!(path = %path.display(), "opened dashboard database");
        Ok(db)
    }

    /// Opens an in-memory SQLite database and runs migrations.
    ///
    /// The database is discarded when the `Database` is dropped.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.run_migrations()?;
        Ok(db)
    }

    fn run_migrations(&self) -> Result<()> {
        migrations::run_all(&self.conn)?;
        Ok(())
    }

    /// Returns a reference to the underlying `rusqlite::Connection`.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Closes the connection, reporting any error SQLite raises while flushing.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| DashboardError::from(e))
    }
}

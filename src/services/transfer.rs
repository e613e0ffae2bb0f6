//! Bulk export, import and wipe across all three tables.

use std::fs;
use std::path::Path;

use rusqlite::Connection;

use crate::database::{with_transaction, RecordStore};
use crate::types::errors::Result;
use crate::types::folder::Folder;
use crate::types::link::Link;
use crate::types::shortcut::Shortcut;
use crate::types::snapshot::Snapshot;

/// Snapshot of every table, each in creation order.
pub fn export_data(conn: &Connection) -> Result<Snapshot> {
    let snapshot = Snapshot {
        folders: conn.get_all::<Folder>()?,
        links: conn.get_all::<Link>()?,
        shortcuts: conn.get_all::<Shortcut>()?,
    };
    tracing::debug!(counts = ?snapshot.counts(), "exported data");
    Ok(snapshot)
}

/// Replaces the store contents with `snapshot`.
///
/// Clears every table, then inserts folders, links and shortcuts in that
/// order, all within one transaction. On error nothing changes.
pub fn import_data(conn: &Connection, snapshot: &Snapshot) -> Result<()> {
    with_transaction(conn, |tx| {
        clear_tables(tx)?;
        tx.bulk_insert(snapshot.folders.as_slice())?;
        tx.bulk_insert(snapshot.links.as_slice())?;
        tx.bulk_insert(snapshot.shortcuts.as_slice())?;
        Ok(())
    })?;
    tracing::info!(counts = ?snapshot.counts(), "imported data");
    Ok(())
}

/// Empties all three tables.
pub fn clear_all(conn: &Connection) -> Result<()> {
    with_transaction(conn, clear_tables)?;
    tracing::info!("cleared all tables");
    Ok(())
}

fn clear_tables(conn: &Connection) -> Result<()> {
    conn.clear::<Link>()?;
    conn.clear::<Folder>()?;
    conn.clear::<Shortcut>()?;
    Ok(())
}

/// Writes a pretty-printed JSON export to `path`.
pub fn export_to_file(conn: &Connection, path: &Path) -> Result<Snapshot> {
    let snapshot = export_data(conn)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, snapshot.to_json_pretty()?)?;
    Ok(snapshot)
}

/// Reads a JSON export from `path` and imports it.
pub fn import_from_file(conn: &Connection, path: &Path) -> Result<Snapshot> {
    let content = fs::read_to_string(path)?;
    let snapshot = Snapshot::from_json(&content)?;
    import_data(conn, &snapshot)?;
    Ok(snapshot)
}

//! Folder Manager for TabDesk.
//!
//! Implements `FolderManagerTrait`: CRUD for sidebar folders, the open/closed
//! toggle, and deletion that cascades to the folder's links.

use rusqlite::types::Value;
use rusqlite::Connection;
use uuid::Uuid;

use crate::database::{clock, with_transaction, RecordStore};
use crate::services::url_policy;
use crate::types::errors::{DashboardError, EntityKind, Result};
use crate::types::folder::{Folder, FolderPatch};
use crate::types::link::Link;

/// Trait defining folder management operations.
pub trait FolderManagerTrait {
    fn create(&mut self, name: &str) -> Result<Folder>;
    fn get(&self, id: &str) -> Result<Option<Folder>>;
    /// All folders, oldest first.
    fn get_all(&self) -> Result<Vec<Folder>>;
    fn update(&mut self, id: &str, patch: FolderPatch) -> Result<Folder>;
    fn rename(&mut self, id: &str, name: &str) -> Result<Folder>;
    /// Flips `is_open` and returns the new state.
    fn toggle(&mut self, id: &str) -> Result<bool>;
    /// Deletes the folder and every link in it. Returns the number of links removed.
    fn delete(&mut self, id: &str) -> Result<usize>;
}

/// Folder manager backed by a SQLite connection.
pub struct FolderManager<'a> {
    conn: &'a Connection,
}

impl<'a> FolderManager<'a> {
    /// Creates a new `FolderManager` using the provided database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl<'a> FolderManagerTrait for FolderManager<'a> {
    /// Creates a closed folder with a fresh id.
    fn create(&mut self, name: &str) -> Result<Folder> {
        let now = clock::now();
        let folder = Folder {
            id: Uuid::new_v4().to_string(),
            name: url_policy::normalize_name(name)?,
            is_open: false,
            created_at: now,
            updated_at: now,
        };
        self.conn.insert(&folder)?;
        tracing::debug!(id = %folder.id, name = %folder.name, "created folder");
        Ok(folder)
    }

    fn get(&self, id: &str) -> Result<Option<Folder>> {
        self.conn.get::<Folder>(id)
    }

    fn get_all(&self) -> Result<Vec<Folder>> {
        self.conn.get_all::<Folder>()
    }

    /// Applies `patch` and refreshes `updated_at`, returning the stored folder.
    fn update(&mut self, id: &str, patch: FolderPatch) -> Result<Folder> {
        let mut folder = self.conn.require::<Folder>(id)?;

        if let Some(name) = patch.name {
            folder.name = url_policy::normalize_name(&name)?;
        }
        if let Some(is_open) = patch.is_open {
            folder.is_open = is_open;
        }
        folder.updated_at = clock::next_after(folder.updated_at);

        let fields = [
            ("name", Value::Text(folder.name.clone())),
            ("is_open", Value::Integer(i64::from(folder.is_open))),
            ("updated_at", Value::Integer(clock::to_micros(folder.updated_at))),
        ];
        if !self.conn.update::<Folder>(id, &fields)? {
            return Err(DashboardError::not_found(EntityKind::Folder, id));
        }
        tracing::debug!(id = %id, "updated folder");
        Ok(folder)
    }

    fn rename(&mut self, id: &str, name: &str) -> Result<Folder> {
        self.update(id, FolderPatch::rename(name))
    }

    fn toggle(&mut self, id: &str) -> Result<bool> {
        let folder = self.conn.require::<Folder>(id)?;
        let is_open = !folder.is_open;
        let fields = [
            ("is_open", Value::Integer(i64::from(is_open))),
            (
                "updated_at",
                Value::Integer(clock::to_micros(clock::next_after(folder.updated_at))),
            ),
        ];
        if !self.conn.update::<Folder>(id, &fields)? {
            return Err(DashboardError::not_found(EntityKind::Folder, id));
        }
        tracing::debug!(id = %id, is_open, "toggled folder");
        Ok(is_open)
    }

    /// Links go first, then the folder, in one transaction.
    fn delete(&mut self, id: &str) -> Result<usize> {
        let removed = with_transaction(self.conn, |conn| {
            conn.require::<Folder>(id)?;
            let removed = conn.delete_where::<Link>("folder_id", id)?;
            conn.delete::<Folder>(id)?;
            Ok(removed)
        })?;
        tracing::info!(id = %id, links_removed = removed, "deleted folder");
        Ok(removed)
    }
}

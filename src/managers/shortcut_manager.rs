//! Shortcut Manager for TabDesk.
//!
//! Implements `ShortcutManagerTrait`: CRUD for the flat shortcut grid.

use rusqlite::types::Value;
use rusqlite::Connection;
use uuid::Uuid;

use crate::database::{clock, RecordStore};
use crate::services::url_policy;
use crate::types::errors::{DashboardError, EntityKind, Result};
use crate::types::shortcut::{Shortcut, ShortcutPatch};

/// Trait defining shortcut management operations.
pub trait ShortcutManagerTrait {
    fn create(&mut self, name: &str, url: &str, favicon: Option<&str>) -> Result<Shortcut>;
    fn get(&self, id: &str) -> Result<Option<Shortcut>>;
    /// All shortcuts, oldest first.
    fn get_all(&self) -> Result<Vec<Shortcut>>;
    fn update(&mut self, id: &str, patch: ShortcutPatch) -> Result<Shortcut>;
    fn delete(&mut self, id: &str) -> Result<()>;
}

/// Shortcut manager backed by a SQLite connection.
pub struct ShortcutManager<'a> {
    conn: &'a Connection,
}

impl<'a> ShortcutManager<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl<'a> ShortcutManagerTrait for ShortcutManager<'a> {
    fn create(&mut self, name: &str, url: &str, favicon: Option<&str>) -> Result<Shortcut> {
        let now = clock::now();
        let shortcut = Shortcut {
            id: Uuid::new_v4().to_string(),
            name: url_policy::normalize_name(name)?,
            url: url_policy::normalize_url(url)?,
            favicon: favicon.map(str::to_string),
            created_at: now,
            updated_at: now,
        };
        self.conn.insert(&shortcut)?;
        tracing::debug!(id = %shortcut.id, "created shortcut");
        Ok(shortcut)
    }

    fn get(&self, id: &str) -> Result<Option<Shortcut>> {
        self.conn.get::<Shortcut>(id)
    }

    fn get_all(&self) -> Result<Vec<Shortcut>> {
        self.conn.get_all::<Shortcut>()
    }

    fn update(&mut self, id: &str, patch: ShortcutPatch) -> Result<Shortcut> {
        let mut shortcut = self.conn.require::<Shortcut>(id)?;

        if let Some(name) = patch.name {
            shortcut.name = url_policy::normalize_name(&name)?;
        }
        if let Some(url) = patch.url {
            shortcut.url = url_policy::normalize_url(&url)?;
        }
        if let Some(favicon) = patch.favicon {
            shortcut.favicon = favicon;
        }
        shortcut.updated_at = clock::next_after(shortcut.updated_at);

        let fields = [
            ("name", Value::Text(shortcut.name.clone())),
            ("url", Value::Text(shortcut.url.clone())),
            ("favicon", shortcut.favicon.clone().map_or(Value::Null, Value::Text)),
            ("updated_at", Value::Integer(clock::to_micros(shortcut.updated_at))),
        ];
        if !self.conn.update::<Shortcut>(id, &fields)? {
            return Err(DashboardError::not_found(EntityKind::Shortcut, id));
        }
        tracing::debug!(id = %id, "updated shortcut");
        Ok(shortcut)
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        if !self.conn.delete::<Shortcut>(id)? {
            return Err(DashboardError::not_found(EntityKind::Shortcut, id));
        }
        tracing::debug!(id = %id, "deleted shortcut");
        Ok(())
    }
}

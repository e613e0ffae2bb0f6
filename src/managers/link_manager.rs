//! Link Manager for TabDesk.
//!
//! Implements `LinkManagerTrait`: CRUD for links, which always belong to a folder.

use rusqlite::types::Value;
use rusqlite::Connection;
use uuid::Uuid;

use crate::database::{clock, RecordStore};
use crate::services::url_policy;
use crate::types::errors::{DashboardError, EntityKind, Result};
use crate::types::folder::Folder;
use crate::types::link::{Link, LinkPatch};

/// Trait defining link management operations.
pub trait LinkManagerTrait {
    fn create(
        &mut self,
        folder_id: &str,
        name: &str,
        url: &str,
        favicon: Option<&str>,
    ) -> Result<Link>;
    fn get(&self, id: &str) -> Result<Option<Link>>;
    /// Links whose `folder_id` matches. Order is unspecified.
    fn get_by_folder_id(&self, folder_id: &str) -> Result<Vec<Link>>;
    fn count(&self) -> Result<usize>;
    fn update(&mut self, id: &str, patch: LinkPatch) -> Result<Link>;
    fn delete(&mut self, id: &str) -> Result<()>;
}

/// Link manager backed by a SQLite connection.
pub struct LinkManager<'a> {
    conn: &'a Connection,
}

impl<'a> LinkManager<'a> {
    /// Creates a new `LinkManager` using the provided database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl<'a> LinkManagerTrait for LinkManager<'a> {
    /// Adds a link to an existing folder. The URL gets `https://` if it has no scheme.
    fn create(
        &mut self,
        folder_id: &str,
        name: &str,
        url: &str,
        favicon: Option<&str>,
    ) -> Result<Link> {
        let name = url_policy::normalize_name(name)?;
        let url = url_policy::normalize_url(url)?;
        self.conn.require::<Folder>(folder_id)?;

        let now = clock::now();
        let link = Link {
            id: Uuid::new_v4().to_string(),
            folder_id: folder_id.to_string(),
            name,
            url,
            favicon: favicon.map(str::to_string),
            created_at: now,
            updated_at: now,
        };
        self.conn.insert(&link)?;
        tracing::debug!(id = %link.id, folder_id = %folder_id, "created link");
        Ok(link)
    }

    fn get(&self, id: &str) -> Result<Option<Link>> {
        self.conn.get::<Link>(id)
    }

    fn get_by_folder_id(&self, folder_id: &str) -> Result<Vec<Link>> {
        self.conn.query_by_index::<Link>("folder_id", folder_id)
    }

    fn count(&self) -> Result<usize> {
        self.conn.count::<Link>()
    }

    fn update(&mut self, id: &str, patch: LinkPatch) -> Result<Link> {
        let mut link = self.conn.require::<Link>(id)?;

        if let Some(name) = patch.name {
            link.name = url_policy::normalize_name(&name)?;
        }
        if let Some(url) = patch.url {
            link.url = url_policy::normalize_url(&url)?;
        }
        if let Some(favicon) = patch.favicon {
            link.favicon = favicon;
        }
        link.updated_at = clock::next_after(link.updated_at);

        let fields = [
            ("name", Value::Text(link.name.clone())),
            ("url", Value::Text(link.url.clone())),
            ("favicon", link.favicon.clone().map_or(Value::Null, Value::Text)),
            ("updated_at", Value::Integer(clock::to_micros(link.updated_at))),
        ];
        if !self.conn.update::<Link>(id, &fields)? {
            return Err(DashboardError::not_found(EntityKind::Link, id));
        }
        tracing::debug!(id = %id, "updated link");
        Ok(link)
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        if !self.conn.delete::<Link>(id)? {
            return Err(DashboardError::not_found(EntityKind::Link, id));
        }
        tracing::debug!(id = %id, "deleted link");
        Ok(())
    }
}

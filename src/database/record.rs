//! Mapping between entity structs and their table rows.

use chrono::{DateTime, Utc};
use rusqlite::types::Value;
use rusqlite::Row;

use super::clock;
use crate::types::errors::EntityKind;
use crate::types::folder::Folder;
use crate::types::link::Link;
use crate::types::shortcut::Shortcut;

/// A struct stored as one row of a table.
///
/// `COLUMNS` lists the table columns in the order `from_row` reads and
/// `to_values` writes them. The first column is always `id`.
pub trait Record: Sized {
    const KIND: EntityKind;
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];
    /// Columns with a secondary index that `query_by_index` accepts.
    const INDEXED: &'static [&'static str];

    fn id(&self) -> &str;
    /// `created_at` and `updated_at`.
    fn timestamps(&self) -> [DateTime<Utc>; 2];
    fn from_row(row: &Row) -> rusqlite::Result<Self>;
    fn to_values(&self) -> Vec<Value>;
}

/// Columns no update may touch.
pub const IMMUTABLE_COLUMNS: &[&str] = &["id", "created_at"];

fn timestamp(row: &Row, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let micros: i64 = row.get(idx)?;
    clock::from_micros(micros).ok_or(rusqlite::Error::IntegralValueOutOfRange(idx, micros))
}

fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

fn optional_text(s: Option<&str>) -> Value {
    s.map_or(Value::Null, text)
}

impl Record for Folder {
    const KIND: EntityKind = EntityKind::Folder;
    const TABLE: &'static str = "folders";
    const COLUMNS: &'static [&'static str] = &["id", "name", "is_open", "created_at", "updated_at"];
    const INDEXED: &'static [&'static str] = &["id", "created_at"];

    fn id(&self) -> &str {
        &self.id
    }

    fn timestamps(&self) -> [DateTime<Utc>; 2] {
        [self.created_at, self.updated_at]
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Folder {
            id: row.get(0)?,
            name: row.get(1)?,
            is_open: row.get(2)?,
            created_at: timestamp(row, 3)?,
            updated_at: timestamp(row, 4)?,
        })
    }

    fn to_values(&self) -> Vec<Value> {
        vec![
            text(&self.id),
            text(&self.name),
            Value::Integer(i64::from(self.is_open)),
            Value::Integer(clock::to_micros(self.created_at)),
            Value::Integer(clock::to_micros(self.updated_at)),
        ]
    }
}

impl Record for Link {
    const KIND: EntityKind = EntityKind::Link;
    const TABLE: &'static str = "links";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "folder_id",
        "name",
        "url",
        "favicon",
        "created_at",
        "updated_at",
    ];
    const INDEXED: &'static [&'static str] = &["id", "folder_id", "created_at"];

    fn id(&self) -> &str {
        &self.id
    }

    fn timestamps(&self) -> [DateTime<Utc>; 2] {
        [self.created_at, self.updated_at]
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Link {
            id: row.get(0)?,
            folder_id: row.get(1)?,
            name: row.get(2)?,
            url: row.get(3)?,
            favicon: row.get(4)?,
            created_at: timestamp(row, 5)?,
            updated_at: timestamp(row, 6)?,
        })
    }

    fn to_values(&self) -> Vec<Value> {
        vec![
            text(&self.id),
            text(&self.folder_id),
            text(&self.name),
            text(&self.url),
            optional_text(self.favicon.as_deref()),
            Value::Integer(clock::to_micros(self.created_at)),
            Value::Integer(clock::to_micros(self.updated_at)),
        ]
    }
}

impl Record for Shortcut {
    const KIND: EntityKind = EntityKind::Shortcut;
    const TABLE: &'static str = "shortcuts";
    const COLUMNS: &'static [&'static str] =
        &["id", "name", "url", "favicon", "created_at", "updated_at"];
    const INDEXED: &'static [&'static str] = &["id", "created_at"];

    fn id(&self) -> &str {
        &self.id
    }

    fn timestamps(&self) -> [DateTime<Utc>; 2] {
        [self.created_at, self.updated_at]
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Shortcut {
            id: row.get(0)?,
            name: row.get(1)?,
            url: row.get(2)?,
            favicon: row.get(3)?,
            created_at: timestamp(row, 4)?,
            updated_at: timestamp(row, 5)?,
        })
    }

    fn to_values(&self) -> Vec<Value> {
        vec![
            text(&self.id),
            text(&self.name),
            text(&self.url),
            optional_text(self.favicon.as_deref()),
            Value::Integer(clock::to_micros(self.created_at)),
            Value::Integer(clock::to_micros(self.updated_at)),
        ]
    }
}

use std::fmt;

use thiserror::Error;

/// Result alias used by the store, managers and services.
pub type Result<T> = std::result::Result<T, DashboardError>;

// === EntityKind ===

/// The three record tables, used to label errors and log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Folder,
    Link,
    Shortcut,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Folder => write!(f, "Folder"),
            EntityKind::Link => write!(f, "Link"),
            EntityKind::Shortcut => write!(f, "Shortcut"),
        }
    }
}

// === DashboardError ===

/// Errors surfaced by dashboard storage and data-access operations.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The storage engine failed: unavailable, full, corrupted or a constraint was violated.
    #[error("Storage error: {0}")]
    Storage(String),
    /// An update, toggle or delete targeted an id that does not exist.
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },
    /// Input rejected before reaching storage (empty name, malformed URL, bad column).
    #[error("Validation error: {0}")]
    Validation(String),
    /// Interchange JSON could not be read or written.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Reading or writing a backup file failed.
    #[error("IO error: {0}")]
    Io(String),
}

impl DashboardError {
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        DashboardError::NotFound {
            kind,
            id: id.into(),
        }
    }
}

impl From<rusqlite::Error> for DashboardError {
    fn from(e: rusqlite::Error) -> Self {
        DashboardError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(e: serde_json::Error) -> Self {
        DashboardError::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(e: std::io::Error) -> Self {
        DashboardError::Io(e.to_string())
    }
}

// === SettingsError ===

/// Errors related to settings management operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    #[error("Settings IO error: {0}")]
    IoError(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
    /// The provided settings key is invalid.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The provided settings value is invalid.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}

use serde::{Deserialize, Serialize};

use super::errors::Result;
use super::folder::Folder;
use super::link::Link;
use super::shortcut::Shortcut;

/// Backup/restore interchange document holding every table.
///
/// Exports written before shortcuts existed have no `shortcuts` key;
/// those load with an empty shortcut list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub folders: Vec<Folder>,
    pub links: Vec<Link>,
    #[serde(default)]
    pub shortcuts: Vec<Shortcut>,
}

/// Row counts of a snapshot, per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotCounts {
    pub folders: usize,
    pub links: usize,
    pub shortcuts: usize,
}

impl Snapshot {
    pub fn counts(&self) -> SnapshotCounts {
        SnapshotCounts {
            folders: self.folders.len(),
            links: self.links.len(),
            shortcuts: self.shortcuts.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.links.is_empty() && self.shortcuts.is_empty()
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

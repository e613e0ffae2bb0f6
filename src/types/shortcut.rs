use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named URL in the top-level shortcut grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shortcut {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for a shortcut. Same `favicon` semantics as [`super::link::LinkPatch`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcutPatch {
    pub name: Option<String>,
    pub url: Option<String>,
    pub favicon: Option<Option<String>>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named URL bound to exactly one folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: String,
    pub folder_id: String,
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for a link. The owning folder cannot be changed.
///
/// `favicon: Some(None)` clears the icon, `None` leaves it as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkPatch {
    pub name: Option<String>,
    pub url: Option<String>,
    pub favicon: Option<Option<String>>,
}

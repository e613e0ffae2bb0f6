use serde::{Deserialize, Serialize};

/// A link as the sidebar renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarLink {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
}

/// A folder together with its links, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarFolder {
    pub id: String,
    pub name: String,
    pub is_open: bool,
    pub links: Vec<SidebarLink>,
}

//! View-model adapter that shapes stored folders and links for the sidebar.

use rusqlite::Connection;

use crate::database::RecordStore;
use crate::types::errors::Result;
use crate::types::folder::Folder;
use crate::types::link::Link;
use crate::types::sidebar::{SidebarFolder, SidebarLink};

impl From<Link> for SidebarLink {
    fn from(link: Link) -> Self {
        SidebarLink {
            id: link.id,
            name: link.name,
            url: link.url,
            favicon: link.favicon,
        }
    }
}

/// Loads every folder (oldest first) with its links.
///
/// Links whose folder no longer exists are never reached from here.
pub fn load_sidebar(conn: &Connection) -> Result<Vec<SidebarFolder>> {
    let folders = conn.get_all::<Folder>()?;
    let mut sidebar = Vec::with_capacity(folders.len());
    for folder in folders {
        let links = conn.query_by_index::<Link>("folder_id", &folder.id)?;
        sidebar.push(SidebarFolder {
            id: folder.id,
            name: folder.name,
            is_open: folder.is_open,
            links: links.into_iter().map(SidebarLink::from).collect(),
        });
    }
    Ok(sidebar)
}

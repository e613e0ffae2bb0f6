// TabDesk data-access layer
// One manager per record kind: folders, links, shortcuts.

pub mod folder_manager;
pub mod link_manager;
pub mod shortcut_manager;

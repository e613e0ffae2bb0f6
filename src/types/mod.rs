// TabDesk shared type definitions
// Records, patches, the interchange snapshot, sidebar view shapes, settings and errors.

pub mod errors;
pub mod folder;
pub mod link;
pub mod settings;
pub mod shortcut;
pub mod sidebar;
pub mod snapshot;

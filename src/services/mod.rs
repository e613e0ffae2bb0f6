// TabDesk services
// Bulk transfer, the sidebar view-model, input normalisation, icon embedding,
// settings persistence and logging setup.

pub mod favicon;
pub mod logging;
pub mod settings_engine;
pub mod sidebar;
pub mod transfer;
pub mod url_policy;

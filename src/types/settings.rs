use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// User-level configuration, stored as `settings.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardSettings {
    /// Overrides the database file location. `None` uses the platform data directory.
    pub database_path: Option<PathBuf>,
    /// Create the "Work" and "Personal" folders when the store starts out empty.
    pub seed_default_folders: bool,
    /// `tracing` filter directive used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            database_path: None,
            seed_default_folders: true,
            log_filter: "tabdesk=info".to_string(),
        }
    }
}

impl DashboardSettings {
    pub fn default_folder_names() -> &'static [&'static str] {
        &["Work", "Personal"]
    }
}

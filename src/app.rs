//! App Core for TabDesk.
//!
//! Owns the record store and the settings, and runs the startup/shutdown lifecycle.

use std::path::{Path, PathBuf};

use crate::database::connection::Database;
use crate::database::{clock, meta, with_transaction};
use crate::managers::folder_manager::{FolderManager, FolderManagerTrait};
use crate::platform;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::errors::Result;
use crate::types::settings::DashboardSettings;

/// Central application struct.
///
/// Managers borrow `db.connection()` and are created per operation:
/// `FolderManager::new(app.db.connection())`.
pub struct App {
    pub db: Database,
    pub settings_engine: SettingsEngine,
}

impl App {
    /// Opens the database at `db_path` with settings from the platform config directory.
    ///
    /// Unreadable settings fall back to defaults with a warning.
    pub fn new(db_path: &str) -> Result<Self> {
        let mut settings_engine = SettingsEngine::new(None);
        if let Err(e) = settings_engine.load() {
            tracing::warn!(error = %e, "failed to load settings, using defaults");
        }
        Self::with_settings(Path::new(db_path), settings_engine)
    }

    /// Opens the database at `db_path` with an already loaded `settings_engine`.
    pub fn with_settings(db_path: &Path, settings_engine: SettingsEngine) -> Result<Self> {
        let db = Database::open(db_path)?;
        Ok(Self { db, settings_engine })
    }

    /// Resolves the database file: explicit override, then settings, then the platform default.
    pub fn resolve_database_path(
        override_path: Option<PathBuf>,
        settings: &DashboardSettings,
    ) -> PathBuf {
        override_path
            .or_else(|| settings.database_path.clone())
            .unwrap_or_else(platform::default_database_path)
    }

    pub fn settings(&self) -> &DashboardSettings {
        self.settings_engine.get_settings()
    }

    /// Startup sequence: first-run initialisation of the store.
    ///
    /// The first startup against a store seeds the default folders (when
    /// enabled and the store has no folders) and marks the store initialised.
    /// Later startups never seed, even if every folder has since been deleted.
    /// Returns the number of folders created.
    pub fn startup(&mut self) -> Result<usize> {
        let conn = self.db.connection();
        if meta::get(conn, meta::INITIALIZED_KEY)?.is_some() {
            return Ok(0);
        }
        let seed = self.settings().seed_default_folders;
        let created = with_transaction(conn, |tx| {
            let mut folders = FolderManager::new(tx);
            let mut created = 0;
            if seed && folders.get_all()?.is_empty() {
                for name in DashboardSettings::default_folder_names() {
                    folders.create(name)?;
                    created += 1;
                }
            }
            meta::set(tx, meta::INITIALIZED_KEY, &clock::now().to_rfc3339())?;
            Ok(created)
        })?;
        tracing::info!(seeded = created, "initialised new store");
        Ok(created)
    }

    /// Shutdown sequence: close the store, surfacing any flush error.
    pub fn shutdown(self) -> Result<()> {
        self.db.close()?;
        tracing::info!("database closed");
        Ok(())
    }
}

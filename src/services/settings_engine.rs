// TabDesk Settings Engine
// Keeps `DashboardSettings` in memory and mirrors every change to
// `settings.json` in the platform config directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::DashboardSettings;

/// Settings file name inside the config directory.
pub const SETTINGS_FILE: &str = "settings.json";

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<DashboardSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &DashboardSettings;
    /// Replaces one top-level key and persists the result.
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn config_path(&self) -> &Path;
}

/// File-backed settings store.
pub struct SettingsEngine {
    path: PathBuf,
    settings: DashboardSettings,
}

fn io_error(action: &str, path: &Path, e: io::Error) -> SettingsError {
    SettingsError::IoError(format!("{} {}: {}", action, path.display(), e))
}

fn json_error(action: &str, e: serde_json::Error) -> SettingsError {
    SettingsError::SerializationError(format!("{}: {}", action, e))
}

impl SettingsEngine {
    /// `None` selects `<config dir>/settings.json`.
    pub fn new(path_override: Option<PathBuf>) -> Self {
        let path = path_override.unwrap_or_else(|| platform::get_config_dir().join(SETTINGS_FILE));
        Self {
            path,
            settings: DashboardSettings::default(),
        }
    }

    fn as_object(&self) -> Result<Map<String, Value>, SettingsError> {
        match serde_json::to_value(&self.settings) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(SettingsError::SerializationError(format!(
                "settings serialised to {} instead of an object",
                other
            ))),
            Err(e) => Err(json_error("cannot serialise settings", e)),
        }
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Reads the settings file. A missing file means defaults; keys absent
    /// from the file take their default values.
    fn load(&mut self) -> Result<DashboardSettings, SettingsError> {
        self.settings = match fs::read_to_string(&self.path) {
            Ok(text) => serde_json::from_str(&text)
                .map_err(|e| json_error("malformed settings file", e))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => DashboardSettings::default(),
            Err(e) => return Err(io_error("cannot read", &self.path, e)),
        };
        Ok(self.settings.clone())
    }

    fn save(&self) -> Result<(), SettingsError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| io_error("cannot create", dir, e))?;
        }
        let text = serde_json::to_string_pretty(&self.settings)
            .map_err(|e| json_error("cannot serialise settings", e))?;
        fs::write(&self.path, text).map_err(|e| io_error("cannot write", &self.path, e))
    }

    fn get_settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// The new value is checked by decoding the whole object again, so
    /// `set_value("seed_default_folders", json!("yes"))` fails and leaves
    /// the current settings untouched.
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), SettingsError> {
        if key.trim().is_empty() {
            return Err(SettingsError::InvalidKey("empty key".to_string()));
        }
        let mut map = self.as_object()?;
        match map.get_mut(key) {
            Some(slot) => *slot = value,
            None => return Err(SettingsError::InvalidKey(format!("unknown key '{}'", key))),
        }

        self.settings = serde_json::from_value(Value::Object(map))
            .map_err(|e| SettingsError::InvalidValue(format!("{}: {}", key, e)))?;
        self.save()?;
        tracing::info!(key, "updated setting");
        Ok(())
    }

    fn reset(&mut self) -> Result<(), SettingsError> {
        self.settings = DashboardSettings::default();
        self.save()?;
        tracing::info!("settings reset to defaults");
        Ok(())
    }

    fn config_path(&self) -> &Path {
        &self.path
    }
}

// TabDesk platform paths
// Resolves where settings and the database live on Linux, macOS and Windows.

use std::env;
use std::path::PathBuf;

/// Environment variable that relocates the data directory (database file).
pub const DATA_DIR_ENV: &str = "TABDESK_DATA_DIR";

/// File name of the database inside the data directory.
pub const DATABASE_FILE: &str = "tabdesk.db";

fn home_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    let var = "USERPROFILE";
    #[cfg(not(target_os = "windows"))]
    let var = "HOME";
    PathBuf::from(env::var(var).unwrap_or_else(|_| String::from("/tmp")))
}

#[cfg_attr(target_os = "macos", allow(dead_code))]
fn xdg_or(var: &str, fallback: PathBuf) -> PathBuf {
    match env::var(var) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => fallback,
    }
}

/// Returns the configuration directory.
///
/// - **Linux**: `$XDG_CONFIG_HOME/tabdesk` or `~/.config/tabdesk`
/// - **macOS**: `~/Library/Application Support/TabDesk`
/// - **Windows**: `%APPDATA%/TabDesk`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        home_dir().join("Library").join("Application Support").join("TabDesk")
    }
    #[cfg(target_os = "windows")]
    {
        xdg_or("APPDATA", home_dir().join("AppData").join("Roaming")).join("TabDesk")
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        xdg_or("XDG_CONFIG_HOME", home_dir().join(".config")).join("tabdesk")
    }
}

/// Returns the data directory, honouring [`DATA_DIR_ENV`] first.
///
/// - **Linux**: `$XDG_DATA_HOME/tabdesk` or `~/.local/share/tabdesk`
/// - **macOS**: `~/Library/Application Support/TabDesk`
/// - **Windows**: `%LOCALAPPDATA%/TabDesk`
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    #[cfg(target_os = "macos")]
    {
        home_dir().join("Library").join("Application Support").join("TabDesk")
    }
    #[cfg(target_os = "windows")]
    {
        xdg_or("LOCALAPPDATA", home_dir().join("AppData").join("Local")).join("TabDesk")
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        xdg_or("XDG_DATA_HOME", home_dir().join(".local").join("share")).join("tabdesk")
    }
}

/// Default location of the database file.
pub fn default_database_path() -> PathBuf {
    get_data_dir().join(DATABASE_FILE)
}

//! Unit tests for the App lifecycle: opening, first-run seeding and shutdown.

use serde_json::json;
use tabdesk::app::App;
use tabdesk::managers::folder_manager::{FolderManager, FolderManagerTrait};
use tabdesk::services::transfer;
use tabdesk::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use tabdesk::types::settings::DashboardSettings;
use tempfile::TempDir;

/// Helper: an App over a temp database and a temp settings file.
fn app_in(dir: &TempDir) -> App {
    let settings_path = dir.path().join("settings.json");
    let mut engine = SettingsEngine::new(Some(settings_path));
    engine.load().expect("failed to load settings");
    App::with_settings(&dir.path().join("tabdesk.db"), engine).expect("failed to open app")
}

fn folder_names(app: &App) -> Vec<String> {
    FolderManager::new(app.db.connection())
        .get_all()
        .unwrap()
        .into_iter()
        .map(|f| f.name)
        .collect()
}

#[test]
fn test_startup_seeds_default_folders_once() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);

    assert_eq!(app.startup().unwrap(), 2);
    assert_eq!(folder_names(&app), vec!["Work", "Personal"]);

    assert_eq!(app.startup().unwrap(), 0);
    assert_eq!(folder_names(&app).len(), 2);
}

#[test]
fn test_startup_skips_seeding_for_non_empty_store() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    FolderManager::new(app.db.connection()).create("Mine").unwrap();

    assert_eq!(app.startup().unwrap(), 0);
    assert_eq!(folder_names(&app), vec!["Mine"]);
}

#[test]
fn test_startup_respects_disabled_seeding() {
    let dir = TempDir::new().unwrap();
    let settings_path = dir.path().join("settings.json");
    let mut engine = SettingsEngine::new(Some(settings_path));
    engine
        .set_value("seed_default_folders", json!(false))
        .unwrap();

    let mut app = app_in(&dir);
    assert!(!app.settings().seed_default_folders);
    assert_eq!(app.startup().unwrap(), 0);
    assert!(folder_names(&app).is_empty());
}

#[test]
fn test_data_survives_shutdown_and_reopen() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    app.startup().unwrap();
    app.shutdown().unwrap();

    let mut reopened = app_in(&dir);
    assert_eq!(reopened.startup().unwrap(), 0);
    assert_eq!(folder_names(&reopened), vec!["Work", "Personal"]);
}

/// Deleting every folder after the first run must not bring the defaults back.
#[test]
fn test_emptied_store_is_not_reseeded_on_reopen() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    assert_eq!(app.startup().unwrap(), 2);
    {
        let mut folders = FolderManager::new(app.db.connection());
        for folder in folders.get_all().unwrap() {
            folders.delete(&folder.id).unwrap();
        }
    }
    app.shutdown().unwrap();

    let mut reopened = app_in(&dir);
    assert_eq!(reopened.startup().unwrap(), 0);
    assert!(folder_names(&reopened).is_empty());
}

#[test]
fn test_clear_all_does_not_trigger_reseed() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    app.startup().unwrap();
    transfer::clear_all(app.db.connection()).unwrap();
    app.shutdown().unwrap();

    let mut reopened = app_in(&dir);
    assert_eq!(reopened.startup().unwrap(), 0);
    assert!(folder_names(&reopened).is_empty());
}

/// First startup with seeding disabled still counts as the first run.
#[test]
fn test_enabling_seeding_after_first_run_does_not_seed() {
    let dir = TempDir::new().unwrap();
    let settings_path = dir.path().join("settings.json");
    let mut engine = SettingsEngine::new(Some(settings_path.clone()));
    engine
        .set_value("seed_default_folders", json!(false))
        .unwrap();
    let mut app = app_in(&dir);
    assert_eq!(app.startup().unwrap(), 0);
    app.shutdown().unwrap();

    let mut engine = SettingsEngine::new(Some(settings_path));
    engine.load().unwrap();
    engine
        .set_value("seed_default_folders", json!(true))
        .unwrap();
    let mut reopened = app_in(&dir);
    assert!(reopened.settings().seed_default_folders);
    assert_eq!(reopened.startup().unwrap(), 0);
    assert!(folder_names(&reopened).is_empty());
}

/// `with_settings` uses the engine as handed over and does not read the file again.
#[test]
fn test_with_settings_keeps_loaded_values() {
    let dir = TempDir::new().unwrap();
    let settings_path = dir.path().join("settings.json");
    let mut engine = SettingsEngine::new(Some(settings_path.clone()));
    engine
        .set_value("seed_default_folders", json!(false))
        .unwrap();

    let mut loaded = SettingsEngine::new(Some(settings_path.clone()));
    loaded.load().unwrap();
    engine
        .set_value("seed_default_folders", json!(true))
        .unwrap();

    let app = App::with_settings(&dir.path().join("tabdesk.db"), loaded).unwrap();
    assert!(!app.settings().seed_default_folders);
}

#[test]
fn test_resolve_database_path_precedence() {
    let mut settings = DashboardSettings::default();
    settings.database_path = Some("/from/settings.db".into());

    let explicit = App::resolve_database_path(Some("/explicit.db".into()), &settings);
    assert_eq!(explicit, std::path::PathBuf::from("/explicit.db"));

    let configured = App::resolve_database_path(None, &settings);
    assert_eq!(configured, std::path::PathBuf::from("/from/settings.db"));

    let fallback = App::resolve_database_path(None, &DashboardSettings::default());
    assert!(fallback.ends_with("tabdesk.db"));
}

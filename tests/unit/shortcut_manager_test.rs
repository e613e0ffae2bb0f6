//! Unit tests for the ShortcutManager public API.

use tabdesk::database::Database;
use tabdesk::managers::shortcut_manager::{ShortcutManager, ShortcutManagerTrait};
use tabdesk::types::errors::{DashboardError, EntityKind};
use tabdesk::types::shortcut::ShortcutPatch;

fn setup() -> Database {
    Database::open_in_memory().expect("Failed to open in-memory database")
}

#[test]
fn test_create_and_list_in_creation_order() {
    let db = setup();
    let mut shortcuts = ShortcutManager::new(db.connection());

    let gh = shortcuts.create("GitHub", "github.com", None).unwrap();
    let rs = shortcuts
        .create("Rust", "https://www.rust-lang.org", Some("data:image/png;base64,AA=="))
        .unwrap();

    assert_eq!(gh.url, "https://github.com");
    assert_eq!(shortcuts.get_all().unwrap(), vec![gh, rs]);
}

/// Two shortcuts, delete the first: only the second remains, untouched.
#[test]
fn test_delete_first_leaves_second_unchanged() {
    let db = setup();
    let mut shortcuts = ShortcutManager::new(db.connection());
    let first = shortcuts.create("One", "one.com", None).unwrap();
    let second = shortcuts.create("Two", "two.com", None).unwrap();

    shortcuts.delete(&first.id).unwrap();

    assert_eq!(shortcuts.get_all().unwrap(), vec![second]);
}

#[test]
fn test_update_refreshes_timestamp_and_keeps_created_at() {
    let db = setup();
    let mut shortcuts = ShortcutManager::new(db.connection());
    let original = shortcuts.create("Docs", "docs.rs", None).unwrap();

    let updated = shortcuts
        .update(
            &original.id,
            ShortcutPatch {
                favicon: Some(Some("https://docs.rs/favicon.ico".to_string())),
                ..ShortcutPatch::default()
            },
        )
        .unwrap();

    assert_eq!(updated.name, original.name);
    assert_eq!(updated.url, original.url);
    assert_eq!(updated.favicon.as_deref(), Some("https://docs.rs/favicon.ico"));
    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at > original.updated_at);
}

#[test]
fn test_update_rejects_bad_url_without_writing() {
    let db = setup();
    let mut shortcuts = ShortcutManager::new(db.connection());
    let original = shortcuts.create("Docs", "docs.rs", None).unwrap();

    let err = shortcuts
        .update(
            &original.id,
            ShortcutPatch {
                url: Some("   ".to_string()),
                ..ShortcutPatch::default()
            },
        )
        .unwrap_err();

    assert!(matches!(err, DashboardError::Validation(_)));
    assert_eq!(shortcuts.get(&original.id).unwrap(), Some(original));
}

#[test]
fn test_missing_shortcut_reports_not_found() {
    let db = setup();
    let mut shortcuts = ShortcutManager::new(db.connection());
    assert!(matches!(
        shortcuts.delete("ghost"),
        Err(DashboardError::NotFound { kind: EntityKind::Shortcut, .. })
    ));
    assert!(matches!(
        shortcuts.update("ghost", ShortcutPatch::default()),
        Err(DashboardError::NotFound { kind: EntityKind::Shortcut, .. })
    ));
}

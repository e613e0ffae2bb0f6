//! Unit tests for the LinkManager public API.

use rstest::rstest;
use tabdesk::database::Database;
use tabdesk::managers::folder_manager::{FolderManager, FolderManagerTrait};
use tabdesk::managers::link_manager::{LinkManager, LinkManagerTrait};
use tabdesk::types::errors::{DashboardError, EntityKind};
use tabdesk::types::link::LinkPatch;

/// Helper: a fresh database with one folder, returning the folder id.
fn setup() -> (Database, String) {
    let db = Database::open_in_memory().expect("Failed to open in-memory database");
    let folder_id = FolderManager::new(db.connection())
        .create("Work")
        .unwrap()
        .id;
    (db, folder_id)
}

/// Creating "Mail" with `mail.co` stores the https-prefixed URL and shows up
/// when listing the folder.
#[test]
fn test_create_link_prefixes_scheme_and_lists_in_folder() {
    let (db, folder_id) = setup();
    let mut links = LinkManager::new(db.connection());

    let link = links.create(&folder_id, "Mail", "mail.co", None).unwrap();

    assert_eq!(link.url, "https://mail.co");
    assert_eq!(link.folder_id, folder_id);
    assert_eq!(links.get_by_folder_id(&folder_id).unwrap(), vec![link]);
}

#[rstest]
#[case("example.com", "https://example.com")]
#[case("http://example.com", "http://example.com")]
#[case("https://example.com/path?q=1", "https://example.com/path?q=1")]
#[case("  docs.rs/serde  ", "https://docs.rs/serde")]
fn test_url_normalisation(#[case] input: &str, #[case] stored: &str) {
    let (db, folder_id) = setup();
    let link = LinkManager::new(db.connection())
        .create(&folder_id, "Site", input, None)
        .unwrap();
    assert_eq!(link.url, stored);
}

#[rstest]
#[case("", "Name")]
#[case("   ", "Name")]
#[case("https://", "Name")]
#[case("example.com", "  ")]
fn test_create_rejects_invalid_input(#[case] url: &str, #[case] name: &str) {
    let (db, folder_id) = setup();
    let err = LinkManager::new(db.connection())
        .create(&folder_id, name, url, None)
        .unwrap_err();
    assert!(matches!(err, DashboardError::Validation(_)), "got {err}");
}

#[test]
fn test_create_in_missing_folder_fails() {
    let (db, _) = setup();
    let err = LinkManager::new(db.connection())
        .create("no-such-folder", "Mail", "mail.co", None)
        .unwrap_err();
    assert!(matches!(
        err,
        DashboardError::NotFound { kind: EntityKind::Folder, .. }
    ));
}

#[test]
fn test_favicon_is_optional_and_stored() {
    let (db, folder_id) = setup();
    let mut links = LinkManager::new(db.connection());

    let plain = links.create(&folder_id, "Plain", "a.com", None).unwrap();
    let iconic = links
        .create(&folder_id, "Icon", "b.com", Some("https://b.com/favicon.ico"))
        .unwrap();

    assert_eq!(links.get(&plain.id).unwrap().unwrap().favicon, None);
    assert_eq!(
        links.get(&iconic.id).unwrap().unwrap().favicon.as_deref(),
        Some("https://b.com/favicon.ico")
    );
}

#[test]
fn test_update_changes_only_patched_fields() {
    let (db, folder_id) = setup();
    let mut links = LinkManager::new(db.connection());
    let original = links
        .create(&folder_id, "Mail", "mail.co", Some("icon"))
        .unwrap();

    let updated = links
        .update(
            &original.id,
            LinkPatch {
                name: Some("Webmail".to_string()),
                ..LinkPatch::default()
            },
        )
        .unwrap();

    assert_eq!(updated.name, "Webmail");
    assert_eq!(updated.url, original.url);
    assert_eq!(updated.favicon, original.favicon);
    assert_eq!(updated.folder_id, original.folder_id);
    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at > original.updated_at);
    assert_eq!(links.get(&original.id).unwrap(), Some(updated));
}

#[test]
fn test_update_can_clear_favicon_and_normalises_url() {
    let (db, folder_id) = setup();
    let mut links = LinkManager::new(db.connection());
    let original = links
        .create(&folder_id, "Mail", "mail.co", Some("icon"))
        .unwrap();

    let updated = links
        .update(
            &original.id,
            LinkPatch {
                url: Some("post.example".to_string()),
                favicon: Some(None),
                ..LinkPatch::default()
            },
        )
        .unwrap();

    assert_eq!(updated.url, "https://post.example");
    assert_eq!(updated.favicon, None);
}

#[test]
fn test_update_and_delete_missing_link_report_not_found() {
    let (db, _) = setup();
    let mut links = LinkManager::new(db.connection());

    assert!(matches!(
        links.update("ghost", LinkPatch::default()),
        Err(DashboardError::NotFound { kind: EntityKind::Link, .. })
    ));
    assert!(matches!(
        links.delete("ghost"),
        Err(DashboardError::NotFound { kind: EntityKind::Link, .. })
    ));
}

#[test]
fn test_delete_link_is_standalone() {
    let (db, folder_id) = setup();
    let mut links = LinkManager::new(db.connection());
    let first = links.create(&folder_id, "One", "one.com", None).unwrap();
    let second = links.create(&folder_id, "Two", "two.com", None).unwrap();

    links.delete(&first.id).unwrap();

    assert_eq!(links.get_by_folder_id(&folder_id).unwrap(), vec![second]);
    assert!(FolderManager::new(db.connection())
        .get(&folder_id)
        .unwrap()
        .is_some());
}

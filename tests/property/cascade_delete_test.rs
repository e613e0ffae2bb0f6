//! Property-based tests for deleting a folder together with its links.
//!
//! For any spread of links across folders, deleting one folder removes
//! exactly that folder's links and leaves every other row alone.

use proptest::prelude::*;
use tabdesk::database::Database;
use tabdesk::managers::folder_manager::{FolderManager, FolderManagerTrait};
use tabdesk::managers::link_manager::{LinkManager, LinkManagerTrait};

/// Strategy: per-folder link counts for two to five folders.
fn arb_layout() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..6, 2..6)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn delete_folder_removes_only_its_links(
        layout in arb_layout(),
        pick in any::<prop::sample::Index>(),
    ) {
        let db = Database::open_in_memory()
            .expect("Failed to open in-memory database");
        let mut folders = FolderManager::new(db.connection());
        let mut links = LinkManager::new(db.connection());

        let mut ids = Vec::new();
        for (i, count) in layout.iter().enumerate() {
            let folder = folders.create(&format!("Folder {}", i)).unwrap();
            for j in 0..*count {
                links
                    .create(&folder.id, &format!("Link {}-{}", i, j), "example.com", None)
                    .unwrap();
            }
            ids.push(folder.id);
        }

        let victim = pick.index(ids.len());
        let total_before = links.count().unwrap();

        let removed = folders.delete(&ids[victim]).unwrap();

        prop_assert_eq!(removed, layout[victim]);
        prop_assert_eq!(links.count().unwrap(), total_before - layout[victim]);
        prop_assert!(folders.get(&ids[victim]).unwrap().is_none());
        prop_assert!(links.get_by_folder_id(&ids[victim]).unwrap().is_empty());

        for (i, id) in ids.iter().enumerate().filter(|(i, _)| *i != victim) {
            prop_assert!(folders.get(id).unwrap().is_some());
            prop_assert_eq!(links.get_by_folder_id(id).unwrap().len(), layout[i]);
        }
    }
}

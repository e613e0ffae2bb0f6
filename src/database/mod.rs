//! TabDesk record store.
//!
//! SQLite connection management, schema migrations, and typed table access
//! for folders, links and shortcuts.
//!
//! # Usage
//!
//! ```no_run
//! use tabdesk::database::{Database, RecordStore};
//! use tabdesk::types::folder::Folder;
//!
//! let db = Database::open_in_memory().expect("failed to open database");
//! let folders: Vec<Folder> = db.connection().get_all().expect("query failed");
//! assert!(folders.is_empty());
//! ```

pub mod clock;
pub mod connection;
pub mod meta;
pub mod migrations;
pub mod record;
pub mod store;

pub use connection::Database;
pub use record::Record;
pub use store::{with_transaction, RecordStore};

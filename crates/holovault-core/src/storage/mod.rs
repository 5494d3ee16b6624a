//! Storage layer: the vault entry model and the indexed store.

pub mod sqlite;
pub mod traits;
pub mod types;

pub use sqlite::SqliteStore;
pub use traits::VaultStore;
pub use types::{EntryKind, VaultEntry};

//! Vault store trait definition.
//!
//! The `VaultStore` trait defines the interface the vault facade builds on.
//! This abstraction keeps the codec and partition semantics independent of
//! the backing database.

use crate::error::Result;
use crate::glyph::Glyph;

use super::types::VaultEntry;

/// Durable keyed collection of vault entries.
///
/// All implementations must ensure:
/// - A primary index on `id` with full-record overwrite (last-writer-wins)
/// - A secondary, non-unique index on `glyph`
/// - Writes replace the whole record atomically; there is no partial-entry
///   state for concurrent readers to observe
pub trait VaultStore: Send + Sync {
    /// Write or overwrite the entry keyed by its `id`.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::Storage` if the backing store cannot complete
    /// the write.
    fn put_entry(&self, entry: &VaultEntry) -> Result<()>;

    /// Get an entry by id.
    ///
    /// Returns `Ok(Some(entry))` with the ciphertext un-decoded, or
    /// `Ok(None)` if no record exists.
    fn get_entry(&self, id: &str) -> Result<Option<VaultEntry>>;

    /// All entries whose partition key equals `glyph`.
    ///
    /// Entries are returned with ciphertext un-decoded; callers that need
    /// values decode per id. No ordering is promised to callers.
    fn list_by_glyph(&self, glyph: &Glyph) -> Result<Vec<VaultEntry>>;

    /// Remove the entry keyed by `id`.
    ///
    /// Returns `true` if a record was evicted, `false` if none existed.
    fn remove_entry(&self, id: &str) -> Result<bool>;
}

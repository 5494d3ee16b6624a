//! Vault facade: the keyed codec over the indexed store.
//!
//! Each operation runs to completion as one unit of work - encode+write or
//! read+decode - with no partial state visible to other callers. Reads are
//! best-effort: a corrupt or mis-keyed record never raises, it behaves as
//! "not found".

use chrono::Utc;
use tracing::warn;

use crate::error::Result;
use crate::glyph::{Glyph, GlyphSlot};
use crate::holo;
use crate::storage::types::{EntryKind, VaultEntry};
use crate::storage::VaultStore;

/// Holographic vault over a store and the active-glyph slot.
///
/// The slot only backs the legacy single-partition calls
/// ([`Vault::store`] / [`Vault::retrieve`]); the explicit-glyph operations
/// never consult it, so tests can drive multiple partitions in one process.
pub struct Vault<S: VaultStore, G: GlyphSlot> {
    store: S,
    slot: G,
}

impl<S: VaultStore, G: GlyphSlot> Vault<S, G> {
    pub fn new(store: S, slot: G) -> Self {
        Self { store, slot }
    }

    /// Encode `value` under `glyph` and write/overwrite the record at `id`.
    ///
    /// Glyph format is not re-validated here; constructing a [`Glyph`]
    /// already guarantees it.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::Storage` if the durable write fails.
    pub fn put(&self, id: &str, value: &serde_json::Value, glyph: &Glyph) -> Result<()> {
        let data = holo::encode(value, glyph)?;
        let entry = VaultEntry {
            id: id.to_string(),
            data,
            glyph: glyph.as_str().to_string(),
            timestamp: Utc::now().timestamp_millis(),
            kind: EntryKind::classify(value),
        };
        self.store.put_entry(&entry)
    }

    /// Decode the value stored at `id`, if it belongs to `glyph`.
    ///
    /// Returns `Ok(None)` when the record is absent, when it belongs to a
    /// different partition (checked before any decode attempt), or when
    /// decoding fails - the failure is logged, not raised. Storage-layer
    /// errors still propagate.
    pub fn get(&self, id: &str, glyph: &Glyph) -> Result<Option<serde_json::Value>> {
        let entry = match self.store.get_entry(id)? {
            Some(entry) => entry,
            None => return Ok(None),
        };

        if entry.glyph != glyph.as_str() {
            return Ok(None);
        }

        match holo::decode(&entry.data, glyph) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                warn!("Entry '{}' failed to decode: {}", id, err);
                Ok(None)
            }
        }
    }

    /// All entries in the `glyph` partition, ciphertext un-decoded.
    pub fn list(&self, glyph: &Glyph) -> Result<Vec<VaultEntry>> {
        self.store.list_by_glyph(glyph)
    }

    /// Explicitly evict the record at `id`, whichever partition it belongs
    /// to. Returns whether a record existed.
    pub fn remove(&self, id: &str) -> Result<bool> {
        self.store.remove_entry(id)
    }

    // --- Active-glyph slot ---

    /// The currently active glyph, if one is configured.
    pub fn active_glyph(&self) -> Option<Glyph> {
        self.slot.load()
    }

    /// Make `glyph` the active partition, replacing any prior value.
    pub fn set_active_glyph(&self, glyph: &Glyph) -> Result<()> {
        self.slot.save(glyph)
    }

    // --- Legacy single-partition convenience ---

    /// Store `value` under `key` in the active partition.
    ///
    /// A silent no-op when no glyph is configured, matching the historical
    /// contract of this call.
    pub fn store(&self, key: &str, value: &serde_json::Value) -> Result<()> {
        match self.slot.load() {
            Some(glyph) => self.put(key, value, &glyph),
            None => Ok(()),
        }
    }

    /// Retrieve the value at `key` from the active partition.
    ///
    /// Returns `Ok(None)` when no glyph is configured.
    pub fn retrieve(&self, key: &str) -> Result<Option<serde_json::Value>> {
        match self.slot.load() {
            Some(glyph) => self.get(key, &glyph),
            None => Ok(None),
        }
    }
}

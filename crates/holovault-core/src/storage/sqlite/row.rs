//! Entry row type for database queries.

use crate::error::{Result, VaultError};
use crate::storage::types::VaultEntry;

/// Raw row data from the entries table, before parsing into domain types.
#[derive(Debug)]
pub struct EntryRow {
    pub id: String,
    pub data: String,
    pub glyph: String,
    pub timestamp: i64,
    pub kind: String,
}

impl TryFrom<EntryRow> for VaultEntry {
    type Error = VaultError;

    fn try_from(row: EntryRow) -> Result<Self> {
        let kind = row
            .kind
            .parse()
            .map_err(|_| VaultError::Storage(format!("Invalid entry type: {}", row.kind)))?;

        Ok(VaultEntry {
            id: row.id,
            data: row.data,
            glyph: row.glyph,
            timestamp: row.timestamp,
            kind,
        })
    }
}

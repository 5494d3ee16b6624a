//! SQLite-backed vault store.
//!
//! The database lives directly on disk; the stored values are already
//! glyph-keyed tokens, so there is no additional at-rest encryption layer.
//! The store is opened lazily on first access and remains open for the
//! process lifetime; schema creation is idempotent, so reopening is safe.

mod row;

use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;

use crate::error::{Result, VaultError};
use crate::glyph::Glyph;
use crate::storage::traits::VaultStore;
use crate::storage::types::VaultEntry;

use row::EntryRow;

/// SQLite vault store.
///
/// The connection is shared behind a mutex: concurrent callers within the
/// same process may issue operations, and conflicting writes to the same
/// `id` serialize to last-writer-wins.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) the vault database at `path`.
    ///
    /// Parent directories are created as needed.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::Storage` if the database cannot be opened or
    /// the schema cannot be initialized.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// An in-memory store, for tests.
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS entries (
                id TEXT PRIMARY KEY,
                data TEXT NOT NULL,
                glyph TEXT NOT NULL,
                timestamp INTEGER NOT NULL,
                type TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS entries_glyph ON entries(glyph);
            "#,
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Lock the database connection, returning an error if the mutex is
    /// poisoned.
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| VaultError::Storage("SQLite connection poisoned".to_string()))
    }
}

impl VaultStore for SqliteStore {
    fn put_entry(&self, entry: &VaultEntry) -> Result<()> {
        let conn = self.lock_conn()?;

        conn.execute(
            r#"
            INSERT INTO entries (id, data, glyph, timestamp, type)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                data = excluded.data,
                glyph = excluded.glyph,
                timestamp = excluded.timestamp,
                type = excluded.type
            "#,
            (
                &entry.id,
                &entry.data,
                &entry.glyph,
                entry.timestamp,
                entry.kind.as_str(),
            ),
        )?;

        Ok(())
    }

    fn get_entry(&self, id: &str) -> Result<Option<VaultEntry>> {
        let conn = self.lock_conn()?;

        let result = conn.query_row(
            "SELECT id, data, glyph, timestamp, type FROM entries WHERE id = ?",
            [id],
            |row| {
                Ok(EntryRow {
                    id: row.get(0)?,
                    data: row.get(1)?,
                    glyph: row.get(2)?,
                    timestamp: row.get(3)?,
                    kind: row.get(4)?,
                })
            },
        );

        match result {
            Ok(row) => Ok(Some(row.try_into()?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn list_by_glyph(&self, glyph: &Glyph) -> Result<Vec<VaultEntry>> {
        let conn = self.lock_conn()?;

        let mut stmt = conn.prepare(
            "SELECT id, data, glyph, timestamp, type FROM entries WHERE glyph = ? ORDER BY timestamp",
        )?;
        let rows = stmt.query_map([glyph.as_str()], |row| {
            Ok(EntryRow {
                id: row.get(0)?,
                data: row.get(1)?,
                glyph: row.get(2)?,
                timestamp: row.get(3)?,
                kind: row.get(4)?,
            })
        })?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?.try_into()?);
        }

        Ok(entries)
    }

    fn remove_entry(&self, id: &str) -> Result<bool> {
        let conn = self.lock_conn()?;
        let affected = conn.execute("DELETE FROM entries WHERE id = ?", [id])?;
        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::types::EntryKind;

    fn entry(id: &str, glyph: &str, timestamp: i64) -> VaultEntry {
        VaultEntry {
            id: id.to_string(),
            data: format!("token-{}", id),
            glyph: glyph.to_string(),
            timestamp,
            kind: EntryKind::Json,
        }
    }

    #[test]
    fn test_put_then_get() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.put_entry(&entry("a", "AAAAAAAA", 1)).unwrap();

        let found = store.get_entry("a").unwrap().expect("entry should exist");
        assert_eq!(found.data, "token-a");
        assert_eq!(found.glyph, "AAAAAAAA");
        assert_eq!(found.kind, EntryKind::Json);
    }

    #[test]
    fn test_get_missing_returns_none() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(store.get_entry("missing").unwrap().is_none());
    }

    #[test]
    fn test_put_overwrites_by_id() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.put_entry(&entry("a", "AAAAAAAA", 1)).unwrap();

        let mut updated = entry("a", "AAAAAAAA", 2);
        updated.data = "token-updated".to_string();
        store.put_entry(&updated).unwrap();

        let found = store.get_entry("a").unwrap().unwrap();
        assert_eq!(found.data, "token-updated");
        assert_eq!(found.timestamp, 2);

        let glyph = Glyph::new("AAAAAAAA").unwrap();
        assert_eq!(store.list_by_glyph(&glyph).unwrap().len(), 1);
    }

    #[test]
    fn test_list_by_glyph_filters_partitions() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.put_entry(&entry("a", "AAAAAAAA", 1)).unwrap();
        store.put_entry(&entry("b", "AAAAAAAA", 2)).unwrap();
        store.put_entry(&entry("c", "AAAAAAAA", 3)).unwrap();
        store.put_entry(&entry("d", "BBBBBBBB", 4)).unwrap();

        let g1 = Glyph::new("AAAAAAAA").unwrap();
        let g2 = Glyph::new("BBBBBBBB").unwrap();

        let first = store.list_by_glyph(&g1).unwrap();
        assert_eq!(first.len(), 3);
        assert!(first.iter().all(|e| e.glyph == "AAAAAAAA"));

        let second = store.list_by_glyph(&g2).unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].id, "d");
    }

    #[test]
    fn test_remove_entry_reports_eviction() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.put_entry(&entry("a", "AAAAAAAA", 1)).unwrap();

        assert!(store.remove_entry("a").unwrap());
        assert!(!store.remove_entry("a").unwrap());
        assert!(store.get_entry("a").unwrap().is_none());
    }
}

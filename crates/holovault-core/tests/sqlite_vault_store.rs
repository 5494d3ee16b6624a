use serde_json::json;
use tempfile::tempdir;

use holovault_core::glyph::{Glyph, MemorySlot};
use holovault_core::storage::{SqliteStore, VaultStore};
use holovault_core::vault::Vault;

#[test]
fn test_store_survives_reopen() {
    let dir = tempdir().expect("tempdir should be available");
    let path = dir.path().join("vault.db");
    let glyph = Glyph::new("QZX1Y2K9").unwrap();

    {
        let vault = Vault::new(SqliteStore::open(&path).unwrap(), MemorySlot::new());
        vault.put("app_state", &json!({"count": 5}), &glyph).unwrap();
    }

    // Reopening runs schema creation again; it must be idempotent and the
    // record must still be there.
    let vault = Vault::new(SqliteStore::open(&path).unwrap(), MemorySlot::new());
    assert_eq!(
        vault.get("app_state", &glyph).unwrap(),
        Some(json!({"count": 5}))
    );
}

#[test]
fn test_open_creates_parent_directories() {
    let dir = tempdir().expect("tempdir should be available");
    let path = dir.path().join("nested").join("deeper").join("vault.db");

    let store = SqliteStore::open(&path).expect("open should create parents");
    assert!(store.get_entry("anything").unwrap().is_none());
    assert!(path.exists());
}

#[test]
fn test_partition_isolation_between_glyphs() {
    let dir = tempdir().expect("tempdir should be available");
    let path = dir.path().join("vault.db");
    let vault = Vault::new(SqliteStore::open(&path).unwrap(), MemorySlot::new());

    let g1 = Glyph::new("AAAAAAAA").unwrap();
    let g2 = Glyph::new("BBBBBBBB").unwrap();

    vault.put("shared-key", &json!({"a": 1}), &g1).unwrap();

    // Reading the same id under a different glyph is a cheap no-op, not an
    // error and not a garbage decode.
    assert_eq!(vault.get("shared-key", &g2).unwrap(), None);
    assert_eq!(vault.get("shared-key", &g1).unwrap(), Some(json!({"a": 1})));
}

#[test]
fn test_secondary_index_counts_per_partition() {
    let dir = tempdir().expect("tempdir should be available");
    let path = dir.path().join("vault.db");
    let vault = Vault::new(SqliteStore::open(&path).unwrap(), MemorySlot::new());

    let g1 = Glyph::new("AAAAAAAA").unwrap();
    let g2 = Glyph::new("BBBBBBBB").unwrap();

    vault.put("one", &json!(1), &g1).unwrap();
    vault.put("two", &json!(2), &g1).unwrap();
    vault.put("three", &json!(3), &g1).unwrap();
    vault.put("four", &json!(4), &g2).unwrap();

    let first = vault.list(&g1).unwrap();
    assert_eq!(first.len(), 3);
    assert!(first.iter().all(|e| e.glyph == "AAAAAAAA"));

    let second = vault.list(&g2).unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].id, "four");
}

#[test]
fn test_overwrite_leaves_single_record() {
    let dir = tempdir().expect("tempdir should be available");
    let path = dir.path().join("vault.db");
    let vault = Vault::new(SqliteStore::open(&path).unwrap(), MemorySlot::new());
    let glyph = Glyph::new("QZX1Y2K9").unwrap();

    vault.put("app_state", &json!({"rev": 1}), &glyph).unwrap();
    vault.put("app_state", &json!({"rev": 2}), &glyph).unwrap();

    assert_eq!(vault.list(&glyph).unwrap().len(), 1);
    assert_eq!(
        vault.get("app_state", &glyph).unwrap(),
        Some(json!({"rev": 2}))
    );
}

#[test]
fn test_listed_entries_stay_encoded() {
    let dir = tempdir().expect("tempdir should be available");
    let path = dir.path().join("vault.db");
    let vault = Vault::new(SqliteStore::open(&path).unwrap(), MemorySlot::new());
    let glyph = Glyph::new("QZX1Y2K9").unwrap();

    vault
        .put("app_state", &json!({"secret": "do not leak"}), &glyph)
        .unwrap();

    let entries = vault.list(&glyph).unwrap();
    assert_eq!(entries.len(), 1);
    assert!(!entries[0].data.contains("secret"));
    assert!(entries[0].timestamp > 0);
}

#[test]
fn test_app_state_snapshot_scenario() {
    // The application-state layer stores whole snapshots under one
    // well-known key and reads them back on launch.
    let dir = tempdir().expect("tempdir should be available");
    let path = dir.path().join("vault.db");
    let vault = Vault::new(SqliteStore::open(&path).unwrap(), MemorySlot::new());

    let glyph = Glyph::new("QZX1Y2K9").unwrap();
    vault.set_active_glyph(&glyph).unwrap();

    let snapshot = json!({
        "isFirstLaunch": false,
        "workflows": [{"id": "wf-1", "name": "daily sync"}],
        "canvas": {"nodes": [], "edges": [], "pan": {"x": 0, "y": 0}, "zoom": 1.0},
    });
    vault.store("app_state", &snapshot).unwrap();

    assert_eq!(vault.retrieve("app_state").unwrap(), Some(snapshot));

    // A wrong glyph after a reinstall just sees an empty vault.
    let wrong = Glyph::new("Q0000000").unwrap();
    assert_eq!(vault.get("app_state", &wrong).unwrap(), None);
    assert!(vault.list(&wrong).unwrap().is_empty());
}

// Host-side tests for the JSON preference store.

#![allow(dead_code)]
mod store {
    include!("../src/store.rs");
}

use std::ffi::OsString;
use store::{prefs_path_from, FileStore};
use tree_core::{KeyValueStore, MemoryStore, PhotoGallery, PresetLoader, StoreError};

#[test]
fn values_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    {
        let mut s = FileStore::open(&path).unwrap();
        s.set("preset_photos_loaded", "true").unwrap();
        s.set("note", "two\nlines = fine").unwrap();
    }
    let s = FileStore::open(&path).unwrap();
    assert_eq!(s.get("preset_photos_loaded").unwrap().as_deref(), Some("true"));
    assert_eq!(s.get("note").unwrap().as_deref(), Some("two\nlines = fine"));
    assert_eq!(s.get("missing").unwrap(), None);
}

#[test]
fn file_is_a_json_object() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("prefs.json");
    let mut s = FileStore::open(&path).unwrap();
    s.set("k", "v").unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, serde_json::json!({ "k": "v" }));
}

#[test]
fn remove_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    let mut s = FileStore::open(&path).unwrap();
    s.set("k", "v").unwrap();
    s.remove("k").unwrap();
    // Removing an absent key is fine
    s.remove("k").unwrap();

    let s = FileStore::open(&path).unwrap();
    assert_eq!(s.get("k").unwrap(), None);
}

#[test]
fn empty_keys_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut s = FileStore::open(dir.path().join("prefs.json")).unwrap();
    assert!(matches!(s.set("", "x"), Err(StoreError::InvalidKey(_))));
}

#[test]
fn corrupt_file_starts_empty_and_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    std::fs::write(&path, [0xff, 0xfe, b'a', b'=', b'1', b'\n']).unwrap();
    assert!(matches!(FileStore::open(&path), Err(StoreError::Io(_))));

    let mut s = FileStore::open_or_empty(&path);
    assert_eq!(s.get("a").unwrap(), None);
    s.set("a", "1").unwrap();
    let s = FileStore::open(&path).unwrap();
    assert_eq!(s.get("a").unwrap().as_deref(), Some("1"));
}

#[test]
fn malformed_json_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    std::fs::write(&path, "{ \"a\": 1, ").unwrap();
    assert!(FileStore::open(&path).is_err());
    assert_eq!(FileStore::open_or_empty(&path).get("a").unwrap(), None);
}

#[test]
fn prefs_live_in_the_config_dir_unless_overridden() {
    let default = prefs_path_from(None);
    assert!(default.ends_with("spiral-tree/prefs.json"));
    if let Some(config) = dirs::config_dir() {
        assert!(default.starts_with(config));
    }
    assert_eq!(prefs_path_from(Some(OsString::new())), default);

    let custom = prefs_path_from(Some(OsString::from("/srv/tree/prefs.json")));
    assert_eq!(custom, std::path::PathBuf::from("/srv/tree/prefs.json"));
}

#[test]
fn preset_flag_is_shared_between_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    let mut gallery = PhotoGallery::default();
    {
        let mut s = FileStore::open(&path).unwrap();
        let added = PresetLoader::default()
            .load_if_needed(&mut s, &mut gallery)
            .unwrap();
        assert_eq!(added, 4);
    }

    let mut s = FileStore::open(&path).unwrap();
    let mut fresh = PhotoGallery::default();
    let added = PresetLoader::default()
        .load_if_needed(&mut s, &mut fresh)
        .unwrap();
    assert_eq!(added, 0);

    // The in-memory store starts clean, so it would load
    let mut mem = MemoryStore::default();
    let added = PresetLoader::default()
        .load_if_needed(&mut mem, &mut fresh)
        .unwrap();
    assert_eq!(added, 4);
}

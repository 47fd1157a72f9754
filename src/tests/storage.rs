use std::fs;

use super::common::setup;
use crate::error::StorageError;
use crate::storage::{ FileStorage, KeyValueStore, ThemeStore, THEME_KEY };
use crate::utils::Theme;
use std::rc::Rc;

#[test]
fn test_missing_file_reads_as_absent() {
    setup();
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path().join("prefs.json"));
    assert_eq!(storage.get_item(THEME_KEY).unwrap(), None);
}

#[test]
fn test_write_then_read_from_fresh_handle() {
    setup();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("prefs.json");

    FileStorage::new(&path).set_item(THEME_KEY, "light").unwrap();
    let reopened = FileStorage::new(&path);
    assert_eq!(reopened.get_item(THEME_KEY).unwrap().as_deref(), Some("light"));

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json, serde_json::json!({ "theme": "light" }));
}

#[test]
fn test_other_keys_are_preserved() {
    setup();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    fs::write(&path, r#"{"font":"serif"}"#).unwrap();

    let storage = FileStorage::new(&path);
    storage.set_item(THEME_KEY, "dark").unwrap();
    assert_eq!(storage.get_item("font").unwrap().as_deref(), Some("serif"));
    assert_eq!(storage.get_item(THEME_KEY).unwrap().as_deref(), Some("dark"));
}

#[test]
fn test_corrupt_file_reported_then_replaced() {
    setup();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    fs::write(&path, "not json").unwrap();

    let storage = FileStorage::new(&path);
    assert!(matches!(storage.get_item(THEME_KEY), Err(StorageError::Corrupt(_))));

    storage.set_item(THEME_KEY, "light").unwrap();
    assert_eq!(storage.get_item(THEME_KEY).unwrap().as_deref(), Some("light"));
}

#[test]
fn test_theme_store_over_file_round_trip() {
    setup();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    let store = ThemeStore::new(Rc::new(FileStorage::new(&path)));
    assert_eq!(store.load(), None);
    store.save(Theme::Light).unwrap();

    let reopened = ThemeStore::new(Rc::new(FileStorage::new(&path)));
    assert_eq!(reopened.load(), Some(Theme::Light));
}

#[test]
fn test_corrupt_file_loads_as_no_override() {
    setup();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    fs::write(&path, "[1, 2").unwrap();

    let store = ThemeStore::new(Rc::new(FileStorage::new(&path)));
    assert_eq!(store.load(), None);
}

#[test]
fn test_unwritable_location_is_an_error() {
    setup();
    let dir = tempfile::tempdir().unwrap();
    // a directory cannot be replaced by the settings file
    let path = dir.path().join("taken");
    fs::create_dir(&path).unwrap();
    fs::write(path.join("child"), "x").unwrap();

    let storage = FileStorage::new(&path);
    assert!(storage.set_item(THEME_KEY, "dark").is_err());
}

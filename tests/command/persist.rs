//! Integration tests for command persistence
//!
//! Tests saving and loading command names through property stores.

use marshal_command::{Command, MemoryStore, NAME_KEY, Persist, PropertyStore};
use marshal_foundation::ErrorKind;
use std::collections::HashMap;

/// A store backed by a plain hash map, to show any store works.
#[derive(Default)]
struct MapStore(HashMap<String, String>);

impl PropertyStore for MapStore {
    fn store_value(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), value.to_string());
    }

    fn retrieve_value(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

#[test]
fn save_writes_only_the_name() {
    let cmd = Command::parse("Set", "1, 2");
    let mut store = MemoryStore::new();
    cmd.save(&mut store).unwrap();

    let entries: Vec<(&str, &str)> = store.iter().collect();
    assert_eq!(entries, vec![(NAME_KEY, "Set")]);
}

#[test]
fn load_restores_name_and_keeps_sequences() {
    let mut store = MapStore::default();
    Command::parse("Get", "").save(&mut store).unwrap();

    let mut cmd = Command::parse("Other", "1");
    cmd.load(&store).unwrap();
    assert_eq!(cmd.name, "Get");
    assert_eq!(cmd.args.len(), 1);
}

#[test]
fn load_without_name_fails() {
    let mut cmd = Command::new();
    let err = cmd.load(&MemoryStore::new()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingProperty(ref key) if key == NAME_KEY));
    assert!(cmd.name.is_empty());
}

#[test]
fn memory_store_messagepack_round_trip() {
    let mut store = MemoryStore::new();
    Command::parse("Log", "x").save(&mut store).unwrap();
    store.store_value("Extra", "value");

    let bytes = store.to_bytes().unwrap();
    let restored = MemoryStore::from_bytes(&bytes).unwrap();
    assert_eq!(restored, store);
    assert_eq!(restored.retrieve_value(NAME_KEY), Some("Log"));
}

#[test]
fn memory_store_rejects_garbage() {
    let err = MemoryStore::from_bytes(&[0xc1, 0x00]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::SerializationError(_)));
}

#[test]
fn memory_store_file_round_trip() {
    let path = std::env::temp_dir().join(format!("marshal-it-{}.mp", std::process::id()));
    let mut store = MemoryStore::new();
    Command::parse("Echo", "1").save(&mut store).unwrap();
    store.save_to_file(&path).unwrap();

    let mut cmd = Command::new();
    cmd.load(&MemoryStore::load_from_file(&path).unwrap()).unwrap();
    assert_eq!(cmd.name, "Echo");

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn missing_file_is_io_error() {
    let path = std::env::temp_dir().join("marshal-it-does-not-exist.mp");
    let err = MemoryStore::load_from_file(&path).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::IoError(_)));
}

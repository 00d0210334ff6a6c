//! Tests for identity generation and the backing stores.

use std::sync::Arc;

use super::*;
use webchat_common::StorageError;

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("disabled".into()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disabled".into()))
    }
}

struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::WriteError("read-only".into()))
    }
}

#[test]
fn token_format() {
    let token = generate_token("user");
    let parts: Vec<&str> = token.split('_').collect();
    assert_eq!(parts.len(), 3, "{token}");
    assert_eq!(parts[0], "user");
    assert!(parts[1].parse::<u128>().is_ok());
    assert_eq!(parts[2].len(), 9);
    assert!(parts[2]
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
}

#[test]
fn tokens_differ() {
    assert_ne!(generate_token("user"), generate_token("user"));
}

#[test]
fn same_store_returns_same_token() {
    let identity = UserIdentity::new(Arc::new(MemoryStore::new()));
    let first = identity.get_or_create();
    let second = identity.get_or_create();
    assert_eq!(first, second);
}

#[test]
fn existing_value_is_reused() {
    let store = Arc::new(MemoryStore::new());
    store.set(DEFAULT_STORAGE_KEY, "user_1_existing").unwrap();
    let identity = UserIdentity::new(store);
    assert_eq!(identity.get_or_create(), "user_1_existing");
}

#[test]
fn empty_stored_value_is_replaced() {
    let store = Arc::new(MemoryStore::new());
    store.set(DEFAULT_STORAGE_KEY, "").unwrap();
    let identity = UserIdentity::new(store.clone());
    let token = identity.get_or_create();
    assert!(token.starts_with("user_"));
    assert_eq!(store.get(DEFAULT_STORAGE_KEY).unwrap(), Some(token));
}

#[test]
fn custom_key_and_prefix() {
    let store = Arc::new(MemoryStore::new());
    let identity = UserIdentity::new(store.clone())
        .with_key("visitor")
        .with_prefix("guest");
    let token = identity.get_or_create();
    assert!(token.starts_with("guest_"));
    assert_eq!(store.get("visitor").unwrap(), Some(token));
    assert_eq!(store.get(DEFAULT_STORAGE_KEY).unwrap(), None);
}

#[test]
fn ephemeral_regenerates_per_call() {
    let identity = UserIdentity::ephemeral();
    let a = identity.get_or_create();
    let b = identity.get_or_create();
    assert!(a.starts_with("user_"));
    assert_ne!(a, b);
}

#[test]
fn broken_store_degrades_without_panicking() {
    let identity = UserIdentity::new(Arc::new(BrokenStore));
    let a = identity.get_or_create();
    let b = identity.get_or_create();
    assert!(a.starts_with("user_"));
    assert_ne!(a, b);
}

#[test]
fn failed_write_still_returns_token() {
    let identity = UserIdentity::new(Arc::new(ReadOnlyStore));
    assert!(identity.get_or_create().starts_with("user_"));
}

#[test]
fn file_store_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("webchat").join("storage.json");

    let first = UserIdentity::new(Arc::new(FileStore::new(&path))).get_or_create();
    let second = UserIdentity::new(Arc::new(FileStore::new(&path))).get_or_create();
    assert_eq!(first, second);
    assert!(path.exists());
}

#[test]
fn file_store_keeps_other_keys() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("storage.json"));
    store.set("theme", "dark").unwrap();
    store.set(DEFAULT_STORAGE_KEY, "user_1_abc").unwrap();

    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(
        store.get(DEFAULT_STORAGE_KEY).unwrap().as_deref(),
        Some("user_1_abc")
    );
}

#[test]
fn file_store_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("absent.json"));
    assert_eq!(store.get(DEFAULT_STORAGE_KEY).unwrap(), None);
}

#[test]
fn file_store_rejects_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    let store = FileStore::new(&path);
    let err = store.get(DEFAULT_STORAGE_KEY).unwrap_err();
    assert!(matches!(err, StorageError::EncodingError(_)));

    // Degraded, not fatal.
    let identity = UserIdentity::new(Arc::new(FileStore::new(&path)));
    assert!(identity.get_or_create().starts_with("user_"));
}

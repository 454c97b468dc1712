//! Key-Value Storage Abstraction
//!
//! The browser build backs this with `window.localStorage`; tests use
//! [`MemoryStore`]. Record lists are JSON arrays appended with a plain
//! read-modify-write, so overlapping appends on one key are last-write-wins.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::PersistenceError;

/// Synchronous string-keyed store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::rc::Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        (**self).set(key, value)
    }
}

/// In-memory store, optionally failing every write
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes fail as if the quota were exceeded
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Default::default()
        }
    }

    /// Seed a raw value, bypassing the read-only flag
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        if self.read_only {
            return Err(PersistenceError::Write("quota exceeded".to_string()));
        }
        self.insert_raw(key, value);
        Ok(())
    }
}

/// Load the record list under `key`; missing or malformed data reads as empty
pub fn load_records<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Vec<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::warn!("[STORAGE] Failed to read '{}': {}", key, e);
            return Vec::new();
        }
    };
    match serde_json::from_str::<Vec<T>>(&raw) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("[STORAGE] Discarding malformed list under '{}': {}", key, e);
            Vec::new()
        }
    }
}

/// Append one record to the list under `key`
pub fn append_record<T: Serialize>(
    store: &impl KeyValueStore,
    key: &str,
    record: &T,
) -> Result<usize, PersistenceError> {
    let mut list: Vec<serde_json::Value> = load_records(store, key);
    let value =
        serde_json::to_value(record).map_err(|e| PersistenceError::Encode(e.to_string()))?;
    list.push(value);
    let raw = serde_json::to_string(&list).map_err(|e| PersistenceError::Encode(e.to_string()))?;
    store.set(key, &raw)?;
    Ok(list.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_empty() {
        let store = MemoryStore::new();
        let list: Vec<String> = load_records(&store, "k");
        assert!(list.is_empty());
    }

    #[test]
    fn test_malformed_value_is_empty() {
        let store = MemoryStore::new();
        store.insert_raw("k", "{oops");
        let list: Vec<String> = load_records(&store, "k");
        assert!(list.is_empty());

        store.insert_raw("k", r#"{"not":"an array"}"#);
        let list: Vec<String> = load_records(&store, "k");
        assert!(list.is_empty());
    }

    #[test]
    fn test_append_preserves_order() {
        let store = MemoryStore::new();
        assert_eq!(append_record(&store, "k", &"first".to_string()), Ok(1));
        assert_eq!(append_record(&store, "k", &"second".to_string()), Ok(2));

        let list: Vec<String> = load_records(&store, "k");
        assert_eq!(list, vec!["first", "second"]);
    }

    #[test]
    fn test_append_after_malformed_starts_fresh() {
        let store = MemoryStore::new();
        store.insert_raw("k", "garbage");
        assert_eq!(append_record(&store, "k", &1u32), Ok(1));
        assert_eq!(store.get("k").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_read_only_store_reports_write_error() {
        let store = MemoryStore::read_only();
        assert!(matches!(
            append_record(&store, "k", &1u32),
            Err(PersistenceError::Write(_))
        ));
    }
}

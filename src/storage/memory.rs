// ABOUTME: In-memory TrackerStore implementation
// ABOUTME: HashMap-backed key-value store mirroring browser local storage
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::TrackerStore;
use crate::errors::AppResult;
use std::collections::HashMap;

/// In-memory key-value store
///
/// Default backend for tests and for hosts that keep session state alive only
/// for the process lifetime.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl TrackerStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_roundtrip() {
        let mut store = MemoryStore::new();
        store.put("currentUser", "{\"username\":\"alex\"}").unwrap();
        assert_eq!(
            store.get("currentUser").unwrap().as_deref(),
            Some("{\"username\":\"alex\"}")
        );
    }

    #[test]
    fn test_remove_absent_key_is_ok() {
        let mut store = MemoryStore::new();
        assert!(store.remove("userProgress").is_ok());
        assert_eq!(store.get("userProgress").unwrap(), None);
    }

    #[test]
    fn test_put_replaces_previous_value() {
        let mut store = MemoryStore::new();
        store.put("k", "a").unwrap();
        store.put("k", "b").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("b"));
    }
}

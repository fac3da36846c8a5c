// ABOUTME: Key-value repository abstraction for persisted session state
// ABOUTME: TrackerStore trait with in-memory and file-backed implementations
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Storage
//!
//! The two persisted entities live as independent serialized blobs under
//! fixed keys (`currentUser`, `userProgress`). This module abstracts that
//! key-value surface behind [`TrackerStore`] so the backend can be swapped
//! without touching the session or metrics layers. Access is synchronous:
//! there is exactly one logical writer and no background tasks.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::errors::AppResult;

/// Key-value store for serialized session state
///
/// Values are JSON text; serialization happens in the session layer so every
/// backend stores byte-identical payloads.
pub trait TrackerStore {
    /// Read the blob stored under `key`, if present
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous blob
    fn put(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// Remove the blob under `key`; removing an absent key is not an error
    fn remove(&mut self, key: &str) -> AppResult<()>;
}

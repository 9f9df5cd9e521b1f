//! In-memory key/value store

use std::collections::HashMap;

use super::KeyValueStore;
use crate::error::StorageError;

/// Key/value store held entirely in memory
///
/// Used by tests and by sessions that run without a data directory. Reads
/// and writes can be made to fail to exercise degraded persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStore {
    /// Create a store whose writes always fail
    pub fn failing_writes() -> Self {
        Self { fail_writes: true, ..Default::default() }
    }

    /// Toggle read failures
    pub fn fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Toggle write failures
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Raw value under a key, bypassing failure injection
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Unavailable("reads disabled".into()));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Unavailable("writes disabled".into()));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

//! Key/value persistence for deck and view state
//!
//! The core never touches the filesystem directly. It reads and writes
//! string values under a handful of logical keys through [`KeyValueStore`],
//! wrapped in [`Persistence`] so a failing backend degrades to an
//! in-memory-only session instead of an error.

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::StorageError;

/// Logical keys of persisted state
pub mod keys {
    /// JSON array of cards
    pub const WORDS: &str = "foreignWords";
    /// `"general"` or `"favorite"`
    pub const LAST_MODE: &str = "lastAppMode";
    /// Cursor in General mode
    pub const GENERAL_INDEX: &str = "generalModeIndex";
    /// Cursor in Favorites mode
    pub const FAVORITE_INDEX: &str = "favoriteModeIndex";
    /// `"AB"` or `"BA"`
    pub const DISPLAY_MODE: &str = "displayMode";
}

/// A synchronous string key/value backend
///
/// An absent key is a normal condition and reads as `Ok(None)`.
pub trait KeyValueStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Backend standing in for storage that couldn't be opened
///
/// Every operation fails, so a session over it starts degraded and runs
/// from memory alone.
#[derive(Debug, Clone)]
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    /// Create with the reason storage is missing
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable(self.reason.clone()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable(self.reason.clone()))
    }
}

/// Backend wrapper that turns storage failures into warnings
///
/// After the first failure the wrapper is degraded: reads report every key
/// as absent and writes are skipped, so the session keeps working from
/// memory alone.
#[derive(Debug)]
pub struct Persistence<S> {
    backend: S,
    degraded: bool,
}

impl<S: KeyValueStore> Persistence<S> {
    /// Wrap a backend
    pub fn new(backend: S) -> Self {
        Self { backend, degraded: false }
    }

    /// Read a key, treating any failure as absence
    pub fn get(&mut self, key: &str) -> Option<String> {
        if self.degraded {
            return None;
        }
        match self.backend.get(key) {
            Ok(value) => value,
            Err(e) => {
                self.degrade(key, &e);
                None
            }
        }
    }

    /// Write a key. Returns false if the value was not persisted.
    pub fn set(&mut self, key: &str, value: &str) -> bool {
        if self.degraded {
            tracing::debug!("Skipping write of {} (storage degraded)", key);
            return false;
        }
        match self.backend.set(key, value) {
            Ok(()) => true,
            Err(e) => {
                self.degrade(key, &e);
                false
            }
        }
    }

    /// Whether a previous read or write failed
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Borrow the wrapped backend
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Unwrap into the backend
    pub fn into_backend(self) -> S {
        self.backend
    }

    fn degrade(&mut self, key: &str, error: &StorageError) {
        tracing::warn!("Storage failed on {}: {}. Continuing without persistence", key, error);
        self.degraded = true;
    }
}

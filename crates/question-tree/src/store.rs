//! Key-Value Store Traits
//!
//! Abstract interface over the browser's draft storage.
//! Implementations: `localStorage` in the UI, `MemoryStore` here.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use thiserror::Error;

/// Storage-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read {key}: {message}")]
    Read { key: String, message: String },

    #[error("failed to write {key}: {message}")]
    Write { key: String, message: String },

    #[error("failed to remove {key}: {message}")]
    Remove { key: String, message: String },
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// String key-value storage
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if absent
    fn load(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn save(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Delete `key`; absent keys are not an error
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// In-memory store for tests and headless use
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    /// Make every following `save`/`remove` fail
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> StoreResult<()> {
        if self.fail_writes.get() {
            return Err(StoreError::Write {
                key: key.to_string(),
                message: "quota exceeded".to_string(),
            });
        }
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        if self.fail_writes.get() {
            return Err(StoreError::Remove {
                key: key.to_string(),
                message: "storage locked".to_string(),
            });
        }
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

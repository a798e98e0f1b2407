//! Persisted key-value store for the theme preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser this is `localStorage` (see `web::LocalStorage`). The
//! controller only sees the `PreferenceStore` trait, so tests and non-browser
//! hosts substitute `MemoryStore`.

use std::collections::HashMap;

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("preference store unavailable")]
    Unavailable,
    #[error("preference store rejected write to {key}")]
    WriteRejected { key: String },
    #[error("preference store backend error: {0}")]
    Backend(String),
}

/// Get/set capability over a string key-value store.
pub trait PreferenceStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` when the backend refuses the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store. Survives controller re-creation as long as the value
/// itself is kept, which is how tests model a page reload.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    reject_writes: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a single entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_owned(), value.to_owned());
        store
    }

    /// Store whose writes always fail, like a full or locked-down `localStorage`.
    #[must_use]
    pub fn rejecting_writes(mut self) -> Self {
        self.reject_writes = true;
        self
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.reject_writes {
            return Err(StoreError::WriteRejected { key: key.to_owned() });
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

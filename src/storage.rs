//! Preference storage capability.
//!
//! The theme switch persists one string through [`PreferenceStore`]. The
//! browser build backs it with `localStorage`; [`MemoryStore`] is the
//! in-process stand-in.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

/// Error returned by [`PreferenceStore::set`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage is reachable (private mode, sandboxed frame, SSR).
    #[error("preference storage is unavailable")]
    Unavailable,
    /// The host refused the write (quota, security policy).
    #[error("preference write rejected: {0}")]
    Rejected(String),
}

/// String key/value storage that survives reloads.
pub trait PreferenceStore {
    /// Stored value for `key`, `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the value could not be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `HashMap`-backed store. Writes can be made to fail for degraded-path tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    reject_writes: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    #[must_use]
    pub fn with(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_owned(), value.to_owned());
        Self { values, reject_writes: false }
    }

    /// Make every subsequent [`PreferenceStore::set`] fail.
    pub fn reject_writes(&mut self, reject: bool) {
        self.reject_writes = reject;
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.reject_writes {
            return Err(StorageError::Rejected(format!("write to {key} refused")));
        }
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

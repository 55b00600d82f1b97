//! In-Memory Storage
//!
//! For tests and for callers that do not need the cart to outlive the process.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::CartStorage;
use crate::error::{CartError, Result};

/// In-memory key-value store.
///
/// Clones share the same entries, so two carts built over clones of one
/// `MemoryStorage` behave like two page loads against the same browser.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a value already stored under `key`
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        if let Ok(mut entries) = storage.entries.write() {
            entries.insert(key.into(), value.into());
        }
        storage
    }

    /// Whether anything is stored under `key`
    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .read()
            .map(|entries| entries.contains_key(key))
            .unwrap_or(false)
    }
}

impl CartStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| CartError::PersistenceRead("storage lock poisoned".into()))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| CartError::PersistenceWrite("storage lock poisoned".into()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| CartError::PersistenceWrite("storage lock poisoned".into()))?;
        entries.remove(key);
        Ok(())
    }
}

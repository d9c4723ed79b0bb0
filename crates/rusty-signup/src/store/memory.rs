//! In-memory storage backend

use crate::store::Storage;
use anyhow::Result;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// In-memory storage backend
///
/// Stores values in a HashMap. Clones share the same map, so a test can
/// hand one clone to a [`CredentialStore`](crate::CredentialStore) and
/// inspect or corrupt the raw blob through another.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create a new, empty memory storage backend
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_basic() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("users").unwrap(), None);

        // Set
        storage.set_item("users", "{}").unwrap();

        // Get
        assert_eq!(storage.get_item("users").unwrap().as_deref(), Some("{}"));
        assert_eq!(storage.get_item("missing").unwrap(), None);

        // Overwrite
        storage.set_item("users", "{\"a\":1}").unwrap();
        assert_eq!(storage.get_item("users").unwrap().as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn test_clones_share_contents() {
        let storage = MemoryStorage::new();
        let view = storage.clone();

        storage.set_item("key", "value").unwrap();
        assert_eq!(view.get_item("key").unwrap().as_deref(), Some("value"));
    }
}

//! Name Store
//!
//! The user's display name, written through to durable storage.

use crate::config::NAME_STORAGE_KEY;
use crate::storage::KeyValueStorage;

/// Single display name with write-through persistence
///
/// Without a storage backend (non-interactive contexts) the store keeps the
/// name in memory only. Storage failures are logged and otherwise ignored.
#[derive(Debug, Clone)]
pub struct NameStore<S: KeyValueStorage> {
    name: String,
    storage: Option<S>,
}

impl<S: KeyValueStorage> NameStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            name: String::new(),
            storage: Some(storage),
        }
    }

    /// Store with no durable backend
    pub fn detached() -> Self {
        Self {
            name: String::new(),
            storage: None,
        }
    }

    /// `new` when a backend is available, `detached` otherwise
    pub fn from_optional(storage: Option<S>) -> Self {
        match storage {
            Some(storage) => Self::new(storage),
            None => Self::detached(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_persistent(&self) -> bool {
        self.storage.is_some()
    }

    /// Set the name and write it through. No validation is done here.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set(NAME_STORAGE_KEY, &self.name) {
                tracing::warn!(error = %e, "[NAME] could not persist name");
            }
        }
    }

    /// Restore the name from storage if a non-empty one is saved.
    pub fn load_name(&mut self) {
        let Some(storage) = &self.storage else {
            return;
        };
        match storage.get(NAME_STORAGE_KEY) {
            Ok(Some(stored)) if !stored.is_empty() => {
                tracing::debug!("[NAME] restored saved name");
                self.name = stored;
            }
            Ok(_) => {}
            Err(e) => tracing::warn!(error = %e, "[NAME] could not read saved name"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::storage::MemoryStorage;

    /// Storage that fails every call
    struct BrokenStorage;

    impl KeyValueStorage for BrokenStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn test_name_survives_new_store_instance() {
        let storage = MemoryStorage::new();
        let mut first = NameStore::new(storage.clone());
        first.set_name("Ada");

        let mut second = NameStore::new(storage.clone());
        assert_eq!(second.name(), "");
        second.load_name();
        assert_eq!(second.name(), "Ada");
    }

    #[test]
    fn test_set_name_writes_fixed_key() {
        let storage = MemoryStorage::new();
        let mut store = NameStore::new(storage.clone());
        store.set_name("John Doe");
        assert_eq!(storage.get("user_name").unwrap().as_deref(), Some("John Doe"));
    }

    #[test]
    fn test_load_without_saved_value_keeps_default() {
        let mut store = NameStore::new(MemoryStorage::new());
        store.load_name();
        assert_eq!(store.name(), "");
    }

    #[test]
    fn test_load_ignores_empty_saved_value() {
        let storage = MemoryStorage::new();
        storage.set(NAME_STORAGE_KEY, "").unwrap();
        let mut store = NameStore::new(storage);
        store.set_name("Kept");
        store.load_name();
        assert_eq!(store.name(), "Kept");
    }

    #[test]
    fn test_detached_store_is_memory_only() {
        let mut store: NameStore<MemoryStorage> = NameStore::detached();
        assert!(!store.is_persistent());
        store.set_name("Jane Smith");
        store.load_name();
        assert_eq!(store.name(), "Jane Smith");
    }

    #[test]
    fn test_storage_failures_are_silent() {
        let mut store = NameStore::new(BrokenStorage);
        store.set_name("Linus");
        store.load_name();
        assert_eq!(store.name(), "Linus");
    }

    #[test]
    fn test_no_validation_in_store() {
        let storage = MemoryStorage::new();
        let mut store = NameStore::new(storage.clone());
        store.set_name("   ");
        assert_eq!(store.name(), "   ");
        assert_eq!(storage.get(NAME_STORAGE_KEY).unwrap().as_deref(), Some("   "));
    }
}

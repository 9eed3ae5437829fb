//! Storage Layer - Core Traits

use crate::error::StorageError;

/// Durable string key-value storage
///
/// Synchronous, like the browser's `localStorage`. Concurrent writers are
/// not coordinated; the last write wins.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

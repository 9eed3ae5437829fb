//! Browser Storage
//!
//! `window.localStorage` through web-sys.

use wasm_bindgen::JsValue;
use web_sys::Storage;

use super::KeyValueStorage;
use crate::error::StorageError;

#[derive(Debug, Clone)]
pub struct BrowserStorage {
    storage: Storage,
}

fn backend_error(e: JsValue) -> StorageError {
    StorageError::Backend(format!("{:?}", e))
}

impl BrowserStorage {
    /// `None` when there is no window or `localStorage` is blocked
    pub fn local() -> Option<Self> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(Some(storage)) => Some(Self { storage }),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = ?e, "[STORAGE] localStorage unavailable");
                None
            }
        }
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(backend_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(backend_error)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage.remove_item(key).map_err(backend_error)
    }
}

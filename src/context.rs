//! Application Context
//!
//! Owns the todo client and the name store and hands them to components.

use leptos::prelude::*;
use todo_client::{ClientConfig, NameStore, TodoClient};

#[cfg(target_arch = "wasm32")]
mod backends {
    pub use todo_client::storage::BrowserStorage as Storage;
    pub use todo_client::transport::FetchTransport as Transport;

    pub fn open_storage() -> Option<Storage> {
        Storage::local()
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backends {
    use std::path::PathBuf;

    pub use todo_client::storage::FileStorage as Storage;
    pub use todo_client::transport::ReqwestTransport as Transport;

    /// Variable overriding the native storage file
    pub const STORAGE_PATH_VAR: &str = "TODO_STORAGE_PATH";

    const DEFAULT_STORAGE_FILE: &str = "todo-web-ui.json";

    pub fn storage_path(configured: Option<String>) -> PathBuf {
        configured
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_FILE))
    }

    pub fn open_storage() -> Option<Storage> {
        Some(Storage::new(storage_path(std::env::var(STORAGE_PATH_VAR).ok())))
    }
}

pub use backends::{Storage, Transport};

/// Top-level views
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Welcome,
    Todos,
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    client: StoredValue<TodoClient<Transport>, LocalStorage>,
    names: StoredValue<NameStore<Storage>, LocalStorage>,
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(
        client: TodoClient<Transport>,
        names: NameStore<Storage>,
        page: (ReadSignal<Page>, WriteSignal<Page>),
    ) -> Self {
        Self {
            client: StoredValue::new_local(client),
            names: StoredValue::new_local(names),
            page: page.0,
            set_page: page.1,
        }
    }

    /// Client and name store for the browser
    pub fn create(page: (ReadSignal<Page>, WriteSignal<Page>)) -> Self {
        let config = ClientConfig::from_build_env();
        tracing::info!(base_url = config.base_url(), "[APP] Using TODO API");
        let names = NameStore::from_optional(backends::open_storage());
        if !names.is_persistent() {
            tracing::warn!("[APP] No durable storage, name will not be remembered");
        }
        Self::new(TodoClient::new(Transport::new(), config), names, page)
    }

    /// Handle to the shared client; clones share state
    pub fn client(&self) -> TodoClient<Transport> {
        self.client.get_value()
    }

    /// Name restored from storage, or the current one if nothing is saved
    pub fn saved_name(&self) -> String {
        self.names.update_value(|names| names.load_name());
        self.names.with_value(|names| names.name().to_string())
    }

    pub fn save_name(&self, name: &str) {
        self.names.update_value(|names| names.set_name(name));
    }

    pub fn show(&self, page: Page) {
        self.set_page.set(page);
    }
}

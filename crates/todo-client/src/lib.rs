//! Todo Client
//!
//! Data access for the Todo web UI:
//! - models: wire structures of the remote TODO API
//! - transport: HTTP seam (browser fetch, reqwest)
//! - storage: durable key-value seam (localStorage, file, memory)
//! - todos / state: the CRUD client and its observable state
//! - name_store: the persisted display name

mod config;
mod error;
mod models;
mod name_store;
mod state;
mod todos;

pub mod storage;
pub mod transport;


pub use config::{ClientConfig, API_BASE_URL_VAR, DEFAULT_API_BASE_URL, NAME_STORAGE_KEY};
pub use error::{ApiError, ApiResult, Operation, StorageError};
pub use models::{Envelope, Priority, Todo, TodoDraft, TodoPage, TodoPatch};
pub use name_store::NameStore;
pub use state::{SharedTodoState, TodoListState};
pub use todos::TodoClient;

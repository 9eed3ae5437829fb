//! Storage Layer
//!
//! Durable key-value storage used by the name store.

mod memory;
mod traits;

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(not(target_arch = "wasm32"))]
mod file;

pub use memory::MemoryStorage;
pub use traits::KeyValueStorage;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStorage;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

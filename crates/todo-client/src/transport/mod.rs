//! Transport Layer
//!
//! HTTP abstraction with browser and native implementations.

mod traits;

#[cfg(target_arch = "wasm32")]
mod fetch;
#[cfg(not(target_arch = "wasm32"))]
mod native;

pub use traits::{ApiRequest, ApiResponse, HttpTransport, Method};

#[cfg(target_arch = "wasm32")]
pub use fetch::FetchTransport;
#[cfg(not(target_arch = "wasm32"))]
pub use native::ReqwestTransport;

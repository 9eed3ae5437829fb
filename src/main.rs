//! Todo Web UI Entry Point

mod app;
mod components;
mod context;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init(tracing::Level::DEBUG) {
        web_sys::console::warn_1(&format!("[APP] Logger init failed: {}", e).into());
    }
    mount_to_body(App);
}

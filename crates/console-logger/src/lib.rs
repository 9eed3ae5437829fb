//! Console Logger
//!
//! Installs the global tracing subscriber: the browser console through
//! `tracing-wasm` in WASM builds, a `fmt` subscriber on stderr elsewhere.

use tracing::Level;

pub type InitError = Box<dyn std::error::Error + Send + Sync>;

/// Install the global subscriber. Fails if one is already set.
#[cfg(target_arch = "wasm32")]
pub fn init(level: Level) -> Result<(), InitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_max_level(level)
        .build();
    tracing_subscriber::registry()
        .with(tracing_wasm::WASMLayer::new(config))
        .try_init()?;
    Ok(())
}

/// Install the global subscriber. Fails if one is already set.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(level: Level) -> Result<(), InitError> {
    use tracing_subscriber::fmt::time::ChronoLocal;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_timer(ChronoLocal::new("%H:%M:%S%.3f".to_string()))
        .with_writer(std::io::stderr)
        .try_init()
}

//! Push notification worker runtime.
//!
//! Wires the decision core (`notify-core`) to a hosting runtime:
//! configuration, shared state, the event dispatch queue, the splash
//! sequence, and graceful shutdown.

pub mod app;
pub mod clients;
pub mod config;
pub mod events;
pub mod feed;
pub mod notification;
pub mod shutdown;
pub mod splash;

use config::AppConfig;

/// Load `.env` and build the runtime configuration.
pub fn init_config() -> Result<AppConfig, anyhow::Error> {
    load_dotenv();
    let config = AppConfig::load()?;
    tracing::info!(
        ambient_lang = %config.ambient_lang,
        queue_capacity = config.queue_capacity,
        "Settings loaded"
    );
    Ok(config)
}

/// Load .env from multiple candidate paths.
fn load_dotenv() {
    let candidates = [".env", "../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::info!("No .env file found, using system environment variables");
}

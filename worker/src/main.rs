//! Standalone worker binary.
//!
//! Runs the notification worker against the in-process host, feeding
//! push deliveries from stdin (one JSON payload per line).

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use push_worker::app::SharedState;
use push_worker::clients::MemoryHost;
use push_worker::{feed, notification, shutdown, splash};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting push notification worker");

    let config = push_worker::init_config()?;
    let splash_handle = if config.splash_enabled {
        let duration = Duration::from_millis(config.splash_duration_ms);
        Some(splash::start(duration, || {
            tracing::info!("Splash sequence completed, handing off");
        }))
    } else {
        None
    };

    let state = SharedState::new(config);
    let host = Arc::new(MemoryHost::new());

    notification::initialize(&state, host.clone()).await;

    // Development feed: one JSON push payload per stdin line.
    let feed_state = state.clone();
    tokio::spawn(async move { feed::stdin_feed(feed_state).await });

    tracing::info!("Worker running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down...");

    shutdown::graceful_shutdown(&state, splash_handle).await;
    Ok(())
}

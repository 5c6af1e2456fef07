use std::time::Duration;

use tokio::time::sleep;

use crate::app::SharedState;
use crate::notification;
use crate::splash::SplashHandle;

pub async fn graceful_shutdown(state: &SharedState, splash: Option<SplashHandle>) {
    tracing::info!("Shutdown sequence started");

    state.shutdown_token().cancel();
    tracing::info!("Shutdown: background loops cancelled");

    if let Some(splash) = splash {
        splash.teardown();
        splash.finished().await;
        tracing::info!("Shutdown: splash sequence torn down");
    }

    notification::queue::close().await;
    tracing::info!("Shutdown: notification queue closed");

    // Give the dispatch worker a moment to finish the in-flight event.
    sleep(Duration::from_millis(200)).await;
    tracing::info!("Shutdown sequence completed");
}

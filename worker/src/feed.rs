//! Development push feed.
//!
//! Reads one JSON payload per stdin line and enqueues it as a push
//! delivery, standing in for the upstream delivery channel. Blank
//! lines are skipped; everything else is forwarded verbatim so that
//! malformed input exercises the degraded decode path end to end.

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::app::SharedState;
use crate::events::PushEvent;
use crate::notification::queue;

/// Forward stdin lines as push deliveries until EOF or shutdown.
pub async fn stdin_feed(state: SharedState) {
    let shutdown = state.shutdown_token().clone();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = tokio::select! {
            _ = shutdown.cancelled() => break,
            line = lines.next_line() => line,
        };

        match line {
            Ok(Some(line)) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let event = PushEvent {
                    data: Some(trimmed.as_bytes().to_vec()),
                };
                if let Err(e) = queue::enqueue_push(event).await {
                    tracing::debug!("Dropping push delivery: {e}");
                }
            }
            Ok(None) => {
                tracing::info!("Push feed input closed");
                break;
            }
            Err(e) => {
                tracing::warn!("Push feed read failed: {e}");
                break;
            }
        }
    }
}

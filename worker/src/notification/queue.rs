//! Event queue and dispatch worker.
//!
//! Push deliveries and notification clicks are handled sequentially;
//! each event is self-contained and is processed to completion before
//! the next one starts.

use std::sync::{Arc, LazyLock};

use notify_core::NotificationHost;
use tokio::sync::{RwLock, mpsc};

use super::handlers;
use crate::app::SharedState;
use crate::events::{NotificationClickEvent, PushEvent, WorkerEvent};

static EVENT_TX: LazyLock<RwLock<Option<mpsc::Sender<WorkerEvent>>>> =
    LazyLock::new(|| RwLock::new(None));

/// Start the dispatch worker.
pub async fn start_worker<H>(state: SharedState, host: Arc<H>)
where
    H: NotificationHost + 'static,
{
    let capacity = state.config().await.queue_capacity;
    let (tx, rx) = mpsc::channel::<WorkerEvent>(capacity);
    {
        let mut slot = EVENT_TX.write().await;
        *slot = Some(tx);
    }

    tokio::spawn(worker_loop(state, host, rx));
    tracing::info!("Notification dispatch worker started (capacity={capacity})");
}

/// Enqueue an inbound push delivery.
pub async fn enqueue_push(event: PushEvent) -> Result<(), String> {
    enqueue(WorkerEvent::Push(event)).await
}

/// Enqueue a notification click.
pub async fn enqueue_click(event: NotificationClickEvent) -> Result<(), String> {
    enqueue(WorkerEvent::Click(event)).await
}

async fn enqueue(event: WorkerEvent) -> Result<(), String> {
    let tx_guard = EVENT_TX.read().await;
    let tx = tx_guard
        .as_ref()
        .ok_or_else(|| "Event queue not initialized".to_string())?;

    tx.try_send(event)
        .map_err(|e| format!("Event queue full or closed: {e}"))?;

    Ok(())
}

/// Close the queue sender to stop the worker loop.
pub async fn close() {
    let mut slot = EVENT_TX.write().await;
    *slot = None;
}

async fn worker_loop<H: NotificationHost>(
    state: SharedState,
    host: Arc<H>,
    mut rx: mpsc::Receiver<WorkerEvent>,
) {
    while let Some(event) = rx.recv().await {
        match event {
            WorkerEvent::Push(push) => handlers::handle_push(&state, host.as_ref(), push).await,
            WorkerEvent::Click(click) => handlers::handle_click(host.as_ref(), click).await,
        }
    }

    tracing::info!("Notification dispatch worker stopped");
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::{close, enqueue_push, start_worker};
    use crate::app::SharedState;
    use crate::clients::MemoryHost;
    use crate::config::AppConfig;
    use crate::events::PushEvent;

    #[tokio::test]
    async fn queue_lifecycle() {
        // Not initialized yet
        assert!(enqueue_push(PushEvent::default()).await.is_err());

        let state = SharedState::new(AppConfig::default());
        let host = Arc::new(MemoryHost::new());
        start_worker(state, host.clone()).await;

        let raw = serde_json::json!({ "title": "queued" }).to_string();
        enqueue_push(PushEvent {
            data: Some(raw.into_bytes()),
        })
        .await
        .expect("enqueue after start");

        // Give the worker a moment to drain the queue.
        tokio::time::sleep(Duration::from_millis(50)).await;
        let displayed = host.displayed();
        assert_eq!(displayed.len(), 1);
        assert_eq!(displayed[0].spec.title, "queued");

        close().await;
        assert!(enqueue_push(PushEvent::default()).await.is_err());
    }
}

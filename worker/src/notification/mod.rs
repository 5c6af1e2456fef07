//! Notification dispatch for push deliveries and clicks.
//!
//! An inbound push is decoded defensively, turned into a displayable
//! notification, and shown through the host capability interface. A
//! later click on that notification closes it and either focuses an
//! exact-match client window or opens a new one.

pub mod handlers;
pub mod queue;

use std::sync::Arc;

use notify_core::NotificationHost;

use crate::app::SharedState;

/// Initialize the notification system.
pub async fn initialize<H>(state: &SharedState, host: Arc<H>)
where
    H: NotificationHost + 'static,
{
    let enabled = state.config().await.notification_enabled;
    if !enabled {
        tracing::info!("Notification system disabled");
        return;
    }

    queue::start_worker(state.clone(), host).await;
    tracing::info!("Notification system initialized");
}

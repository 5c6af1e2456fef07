//! Worker event types.
//!
//! A push delivery and a later click on the resulting notification
//! are temporally disjoint events; the only state that crosses
//! between them is the [`ClickData`] the host keeps attached to the
//! displayed notification.

use notify_core::{ClickData, NotificationId};

/// An inbound push delivery. `data` is the raw message bytes, if any.
#[derive(Debug, Clone, Default)]
pub struct PushEvent {
    pub data: Option<Vec<u8>>,
}

/// A click on a previously displayed notification.
#[derive(Debug, Clone)]
pub struct NotificationClickEvent {
    pub notification: NotificationId,
    /// Attached click data. Absent data is tolerated and defaults the
    /// navigation target to `/`.
    pub data: Option<ClickData>,
}

/// Queue item processed by the dispatch worker.
#[derive(Debug, Clone)]
pub enum WorkerEvent {
    Push(PushEvent),
    Click(NotificationClickEvent),
}

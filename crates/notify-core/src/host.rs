//! Host runtime capabilities.
//!
//! The hosting runtime's notification and window APIs are modeled as
//! a capability trait so the decision logic stays testable without a
//! real display surface. The worker only orchestrates these calls; it
//! never retries them.

use std::fmt;
use std::future::Future;

use crate::notification::NotificationSpec;
use crate::routing::{ClientId, ClientInfo};

/// Identifier of a displayed notification, assigned by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotificationId(pub String);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors reported by host capability calls.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("display rejected: {0}")]
    DisplayRejected(String),

    #[error("unknown client: {0}")]
    UnknownClient(String),

    #[error("window open failed: {0}")]
    OpenFailed(String),

    #[error("client enumeration failed: {0}")]
    EnumerationFailed(String),
}

/// Capabilities the hosting runtime provides to the worker.
pub trait NotificationHost: Send + Sync {
    /// Display a notification and return its host-assigned id.
    fn show(
        &self,
        spec: &NotificationSpec,
    ) -> impl Future<Output = Result<NotificationId, HostError>> + Send;

    /// Dismiss a displayed notification. Closing an already-closed
    /// notification is a no-op.
    fn close(&self, id: &NotificationId) -> impl Future<Output = Result<(), HostError>> + Send;

    /// Enumerate all currently open client windows, in host order.
    fn list_clients(&self) -> impl Future<Output = Result<Vec<ClientInfo>, HostError>> + Send;

    /// Bring an open client window to the foreground.
    fn focus(&self, id: &ClientId) -> impl Future<Output = Result<(), HostError>> + Send;

    /// Open a new client window at the given URL.
    fn open_window(&self, url: &str) -> impl Future<Output = Result<(), HostError>> + Send;
}

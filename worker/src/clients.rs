//! In-process notification host.
//!
//! Stands in for a real display surface: notifications are rendered
//! as tracing output and the client surface is an in-memory window
//! list. Used by the standalone binary (dry-run display) and by the
//! handler tests.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use notify_core::{
    ClientId, ClientInfo, HostError, NotificationHost, NotificationId, NotificationSpec,
};

/// A notification displayed by the host.
#[derive(Debug, Clone)]
pub struct DisplayedNotification {
    pub id: NotificationId,
    pub spec: NotificationSpec,
    pub displayed_at: DateTime<Utc>,
}

#[derive(Default)]
struct Surface {
    displayed: Vec<DisplayedNotification>,
    closed: Vec<NotificationId>,
    clients: Vec<ClientInfo>,
    focused: Vec<ClientId>,
    opened: Vec<String>,
}

/// In-memory host. Capability calls succeed unless they reference an
/// unknown client.
#[derive(Default)]
pub struct MemoryHost {
    surface: Mutex<Surface>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an open client window and return its id.
    pub fn add_client(&self, url: &str) -> ClientId {
        let id = ClientId(uuid::Uuid::new_v4().to_string());
        self.lock().clients.push(ClientInfo {
            id: id.clone(),
            url: url.to_string(),
        });
        id
    }

    pub fn displayed(&self) -> Vec<DisplayedNotification> {
        self.lock().displayed.clone()
    }

    pub fn closed(&self) -> Vec<NotificationId> {
        self.lock().closed.clone()
    }

    pub fn focused(&self) -> Vec<ClientId> {
        self.lock().focused.clone()
    }

    pub fn opened(&self) -> Vec<String> {
        self.lock().opened.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Surface> {
        self.surface.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl NotificationHost for MemoryHost {
    async fn show(&self, spec: &NotificationSpec) -> Result<NotificationId, HostError> {
        let id = NotificationId(uuid::Uuid::new_v4().to_string());

        let rendered = serde_json::json!({
            "title": spec.title,
            "options": {
                "body": spec.body,
                "icon": spec.icon,
                "badge": spec.badge,
                "data": { "url": spec.data.url },
            },
        });
        tracing::info!(notification = %rendered, "Displaying notification");

        self.lock().displayed.push(DisplayedNotification {
            id: id.clone(),
            spec: spec.clone(),
            displayed_at: Utc::now(),
        });
        Ok(id)
    }

    async fn close(&self, id: &NotificationId) -> Result<(), HostError> {
        // Closing an unknown or already-closed notification is a no-op.
        let mut surface = self.lock();
        if !surface.closed.contains(id) {
            surface.closed.push(id.clone());
        }
        Ok(())
    }

    async fn list_clients(&self) -> Result<Vec<ClientInfo>, HostError> {
        Ok(self.lock().clients.clone())
    }

    async fn focus(&self, id: &ClientId) -> Result<(), HostError> {
        let mut surface = self.lock();
        if !surface.clients.iter().any(|c| &c.id == id) {
            return Err(HostError::UnknownClient(id.to_string()));
        }
        surface.focused.push(id.clone());
        Ok(())
    }

    async fn open_window(&self, url: &str) -> Result<(), HostError> {
        let mut surface = self.lock();
        let id = ClientId(uuid::Uuid::new_v4().to_string());
        surface.clients.push(ClientInfo {
            id,
            url: url.to_string(),
        });
        surface.opened.push(url.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use notify_core::NotificationHost;

    use super::MemoryHost;

    #[tokio::test]
    async fn close_is_idempotent() {
        let host = MemoryHost::new();
        let spec = notify_core::build_notification(
            &notify_core::decode_payload(None),
            None,
            &notify_core::DisplayConfig::default(),
        );
        let id = host.show(&spec).await.expect("show");

        host.close(&id).await.expect("first close");
        host.close(&id).await.expect("second close");
        assert_eq!(host.closed().len(), 1);
    }

    #[tokio::test]
    async fn opened_windows_become_enumerable_clients() {
        let host = MemoryHost::new();
        host.open_window("/inbox").await.expect("open");

        let clients = host.list_clients().await.expect("list");
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].url, "/inbox");
    }

    #[tokio::test]
    async fn focusing_an_unknown_client_fails() {
        let host = MemoryHost::new();
        let id = notify_core::ClientId("nope".into());
        assert!(host.focus(&id).await.is_err());
    }
}

//! Click routing: focus an existing client or open a new window.

use std::fmt;

/// Identifier of an open client window, assigned by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientId(pub String);

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An open client window the host can enumerate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientInfo {
    pub id: ClientId,
    pub url: String,
}

/// The navigation to perform for a notification click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    /// Focus an already-open client.
    Focus(ClientId),
    /// Open a new window at the target URL.
    Open(String),
}

/// Resolve a click target against the open clients.
///
/// First exact URL match in enumeration order wins; no trailing-slash,
/// query-string, or case normalization is applied. Callers must keep
/// `url` values canonical if tab reuse matters.
pub fn resolve_click(target: &str, clients: &[ClientInfo]) -> NavigationAction {
    for client in clients {
        if client.url == target {
            return NavigationAction::Focus(client.id.clone());
        }
    }
    NavigationAction::Open(target.to_string())
}

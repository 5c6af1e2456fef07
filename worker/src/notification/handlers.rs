//! Push and click event handlers.
//!
//! Neither handler ever surfaces an error to the dispatch loop: a
//! malformed payload degrades to a visible notification and host-call
//! failures are logged and dropped, not retried.

use notify_core::{
    DEFAULT_CLICK_URL, NavigationAction, NotificationHost, build_notification, decode_payload,
    resolve_click,
};

use crate::app::SharedState;
use crate::events::{NotificationClickEvent, PushEvent};

/// Display a notification for an inbound push delivery.
///
/// The show call is awaited before the handler completes, so the
/// event stays alive until the display operation settles.
pub async fn handle_push<H: NotificationHost>(state: &SharedState, host: &H, event: PushEvent) {
    let decoded = decode_payload(event.data.as_deref());

    let (ambient_lang, display) = {
        let config = state.config().await;
        (config.ambient_lang.clone(), config.display())
    };

    let spec = build_notification(&decoded, Some(&ambient_lang), &display);
    match host.show(&spec).await {
        Ok(id) => tracing::debug!(notification = %id, title = %spec.title, "Notification displayed"),
        Err(e) => tracing::warn!("Failed to display notification: {e}"),
    }
}

/// Route a notification click.
///
/// Closes the notification first, unconditionally, then focuses the
/// first client whose URL exactly equals the target, or opens a new
/// window when none matches.
pub async fn handle_click<H: NotificationHost>(host: &H, event: NotificationClickEvent) {
    if let Err(e) = host.close(&event.notification).await {
        tracing::debug!("Failed to close notification {}: {e}", event.notification);
    }

    let target = event
        .data
        .map(|d| d.url)
        .unwrap_or_else(|| DEFAULT_CLICK_URL.to_string());

    let clients = match host.list_clients().await {
        Ok(clients) => clients,
        Err(e) => {
            tracing::warn!("Failed to enumerate clients: {e}");
            return;
        }
    };

    match resolve_click(&target, &clients) {
        NavigationAction::Focus(id) => {
            if let Err(e) = host.focus(&id).await {
                tracing::warn!("Failed to focus client {id}: {e}");
            } else {
                tracing::debug!(client = %id, url = %target, "Focused existing client");
            }
        }
        NavigationAction::Open(url) => {
            if let Err(e) = host.open_window(&url).await {
                tracing::warn!("Failed to open window at {url}: {e}");
            } else {
                tracing::debug!(url = %url, "Opened new client window");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use notify_core::{ClickData, NotificationId};

    use super::{handle_click, handle_push};
    use crate::app::SharedState;
    use crate::clients::MemoryHost;
    use crate::config::AppConfig;
    use crate::events::{NotificationClickEvent, PushEvent};

    fn state() -> SharedState {
        SharedState::new(AppConfig::default())
    }

    fn push(json: serde_json::Value) -> PushEvent {
        PushEvent {
            data: Some(json.to_string().into_bytes()),
        }
    }

    #[tokio::test]
    async fn push_without_title_shows_locale_default() {
        let host = MemoryHost::new();
        handle_push(&state(), &host, push(serde_json::json!({ "body": "hi" }))).await;

        let displayed = host.displayed();
        assert_eq!(displayed.len(), 1);
        assert_eq!(displayed[0].spec.title, "Nouvelle notification");
        assert_eq!(displayed[0].spec.body, "hi");
    }

    #[tokio::test]
    async fn push_with_english_lang_shows_english_default() {
        let host = MemoryHost::new();
        handle_push(&state(), &host, push(serde_json::json!({ "lang": "en-GB" }))).await;

        assert_eq!(host.displayed()[0].spec.title, "New notification");
    }

    #[tokio::test]
    async fn push_title_is_displayed_verbatim() {
        let host = MemoryHost::new();
        handle_push(&state(), &host, push(serde_json::json!({ "title": "Sold!" }))).await;

        assert_eq!(host.displayed()[0].spec.title, "Sold!");
    }

    #[tokio::test]
    async fn malformed_push_still_shows_a_notification() {
        let host = MemoryHost::new();
        handle_push(
            &state(),
            &host,
            PushEvent {
                data: Some(b"}{ definitely not json".to_vec()),
            },
        )
        .await;

        let displayed = host.displayed();
        assert_eq!(displayed.len(), 1);
        assert_eq!(displayed[0].spec.body, "}{ definitely not json");
        assert_eq!(displayed[0].spec.title, "Nouvelle notification");
    }

    #[tokio::test]
    async fn click_always_closes_the_notification() {
        let host = MemoryHost::new();
        handle_push(&state(), &host, push(serde_json::json!({}))).await;
        let id = host.displayed()[0].id.clone();

        handle_click(
            &host,
            NotificationClickEvent {
                notification: id.clone(),
                data: Some(ClickData { url: "/".into() }),
            },
        )
        .await;

        assert_eq!(host.closed(), vec![id]);
    }

    #[tokio::test]
    async fn click_focuses_the_matching_client() {
        let host = MemoryHost::new();
        host.add_client("/inbox");
        let orders = host.add_client("/orders");

        handle_click(
            &host,
            NotificationClickEvent {
                notification: NotificationId("n1".into()),
                data: Some(ClickData {
                    url: "/orders".into(),
                }),
            },
        )
        .await;

        assert_eq!(host.focused(), vec![orders]);
        assert!(host.opened().is_empty());
    }

    #[tokio::test]
    async fn click_opens_a_window_when_nothing_matches() {
        let host = MemoryHost::new();
        host.add_client("/inbox");

        handle_click(
            &host,
            NotificationClickEvent {
                notification: NotificationId("n1".into()),
                data: Some(ClickData {
                    url: "/orders".into(),
                }),
            },
        )
        .await;

        assert!(host.focused().is_empty());
        assert_eq!(host.opened(), vec!["/orders".to_string()]);
        assert_eq!(host.closed(), vec![NotificationId("n1".into())]);
    }

    #[tokio::test]
    async fn click_focuses_only_the_first_of_identical_matches() {
        let host = MemoryHost::new();
        let first = host.add_client("/inbox");
        host.add_client("/inbox");
        host.add_client("/inbox");

        handle_click(
            &host,
            NotificationClickEvent {
                notification: NotificationId("n1".into()),
                data: Some(ClickData { url: "/inbox".into() }),
            },
        )
        .await;

        assert_eq!(host.focused(), vec![first]);
        assert!(host.opened().is_empty());
    }

    #[tokio::test]
    async fn click_without_data_navigates_to_root() {
        let host = MemoryHost::new();

        handle_click(
            &host,
            NotificationClickEvent {
                notification: NotificationId("n1".into()),
                data: None,
            },
        )
        .await;

        assert_eq!(host.opened(), vec!["/".to_string()]);
    }

    #[tokio::test]
    async fn default_click_url_round_trips_from_push_to_click() {
        let host = MemoryHost::new();
        handle_push(&state(), &host, push(serde_json::json!({ "body": "no url" }))).await;

        let displayed = host.displayed()[0].clone();
        assert_eq!(displayed.spec.data.url, "/");

        handle_click(
            &host,
            NotificationClickEvent {
                notification: displayed.id,
                data: Some(displayed.spec.data),
            },
        )
        .await;

        assert_eq!(host.opened(), vec!["/".to_string()]);
    }
}

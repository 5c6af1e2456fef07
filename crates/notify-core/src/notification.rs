//! Notification construction.

use serde::{Deserialize, Serialize};

use crate::locale::{self, Language};
use crate::payload::{DecodedPayload, PushPayload};

pub const DEFAULT_FALLBACK_IMAGE: &str = "/icons/icon-192.png";
pub const DEFAULT_CLICK_URL: &str = "/";
pub const DEFAULT_TITLE_EN: &str = "New notification";
pub const DEFAULT_TITLE_FR: &str = "Nouvelle notification";

/// Click-time data attached to a displayed notification.
///
/// The target URL is the only payload state that survives from the
/// push event until the later click event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickData {
    pub url: String,
}

/// A notification the host runtime is asked to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSpec {
    pub title: String,
    pub body: String,
    pub icon: String,
    pub badge: String,
    pub data: ClickData,
}

/// Display-time configuration: the shared fallback asset path, the
/// default click target, and the locale default titles.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub fallback_image: String,
    pub default_url: String,
    pub title_english: String,
    pub title_french: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fallback_image: DEFAULT_FALLBACK_IMAGE.into(),
            default_url: DEFAULT_CLICK_URL.into(),
            title_english: DEFAULT_TITLE_EN.into(),
            title_french: DEFAULT_TITLE_FR.into(),
        }
    }
}

impl DisplayConfig {
    fn default_title(&self, language: Language) -> &str {
        match language {
            Language::English => &self.title_english,
            Language::French => &self.title_french,
        }
    }
}

/// Build the notification for a decoded payload.
///
/// The payload's own non-empty `title` always wins over the locale
/// default. `icon` and `badge` share one fallback image, and
/// `data.url` is always set, `'/'` when the payload omits it.
pub fn build_notification(
    decoded: &DecodedPayload,
    ambient_lang: Option<&str>,
    config: &DisplayConfig,
) -> NotificationSpec {
    let empty = PushPayload::default();
    let (payload, degraded_body) = match decoded {
        DecodedPayload::Structured(payload) => (payload, None),
        DecodedPayload::Degraded { body } => (&empty, Some(body.as_str())),
    };

    let language = locale::classify(payload.lang.as_deref(), ambient_lang);
    let title = match payload.title.as_deref() {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => config.default_title(language).to_string(),
    };

    let body = payload
        .body
        .clone()
        .or_else(|| degraded_body.map(str::to_string))
        .unwrap_or_default();

    NotificationSpec {
        title,
        body,
        icon: non_empty_or(payload.icon.as_deref(), &config.fallback_image),
        badge: non_empty_or(payload.badge.as_deref(), &config.fallback_image),
        data: ClickData {
            url: non_empty_or(payload.url.as_deref(), &config.default_url),
        },
    }
}

fn non_empty_or(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

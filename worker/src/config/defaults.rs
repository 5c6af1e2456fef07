//! All setting definitions with their default values.

use std::collections::HashMap;
use std::sync::LazyLock;

type DefTuple = (&'static str, &'static str, &'static str);

const DEFS: &[DefTuple] = &[
    ("AMBIENT_LANG", "fr", "Worker ambient language hint (BCP 47 tag)"),
    (
        "FALLBACK_IMAGE",
        "/icons/icon-192.png",
        "Icon/badge image path used when the payload omits one",
    ),
    (
        "DEFAULT_CLICK_URL",
        "/",
        "Navigation target used when the payload omits a url",
    ),
    ("TITLE_EN", "New notification", "Default title for English locales"),
    (
        "TITLE_FR",
        "Nouvelle notification",
        "Default title for all other locales",
    ),
    ("NOTIFICATION_ENABLED", "true", "Enable the notification dispatch worker"),
    ("QUEUE_CAPACITY", "100", "Pending event queue capacity"),
    ("SPLASH_ENABLED", "true", "Run the splash sequence at startup"),
    ("SPLASH_DURATION_MS", "5600", "Splash display duration in milliseconds"),
];

/// A single setting definition.
#[derive(Debug, Clone)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

/// Global setting definitions indexed by key.
pub static DEFAULT_SETTINGS: LazyLock<HashMap<&'static str, SettingDef>> = LazyLock::new(|| {
    DEFS.iter()
        .map(|&(key, default, description)| {
            (
                key,
                SettingDef {
                    key,
                    default,
                    description,
                },
            )
        })
        .collect()
});

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS.get(key).map(|d| d.default)
}

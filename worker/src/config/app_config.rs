//! Runtime worker configuration loaded from environment + defaults.

use notify_core::DisplayConfig;

use super::defaults;
use super::validation::validate_setting;

/// Runtime configuration for the worker.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub ambient_lang: String,
    pub fallback_image: String,
    pub default_click_url: String,
    pub title_en: String,
    pub title_fr: String,
    pub notification_enabled: bool,
    pub queue_capacity: usize,
    pub splash_enabled: bool,
    pub splash_duration_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ambient_lang: "fr".into(),
            fallback_image: "/icons/icon-192.png".into(),
            default_click_url: "/".into(),
            title_en: "New notification".into(),
            title_fr: "Nouvelle notification".into(),
            notification_enabled: true,
            queue_capacity: 100,
            splash_enabled: true,
            splash_duration_ms: 5600,
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment, falling back to the
    /// setting defaults. Invalid values are logged and replaced with
    /// their default.
    pub fn load() -> Result<Self, anyhow::Error> {
        let g = |key: &str| -> String {
            let default = defaults::get_default(key).unwrap_or_default();
            let value = std::env::var(key).unwrap_or_else(|_| default.to_string());
            if let Err(reason) = validate_setting(key, &value) {
                tracing::warn!(key, reason = %reason, "Invalid setting value, using default");
                return default.to_string();
            }
            value
        };

        Ok(Self {
            ambient_lang: g("AMBIENT_LANG"),
            fallback_image: g("FALLBACK_IMAGE"),
            default_click_url: g("DEFAULT_CLICK_URL"),
            title_en: g("TITLE_EN"),
            title_fr: g("TITLE_FR"),
            notification_enabled: g("NOTIFICATION_ENABLED") == "true",
            queue_capacity: parse_usize(&g("QUEUE_CAPACITY"), 100),
            splash_enabled: g("SPLASH_ENABLED") == "true",
            splash_duration_ms: parse_u64(&g("SPLASH_DURATION_MS"), 5600),
        })
    }

    /// Reload config from the environment.
    pub fn reload(&mut self) -> Result<(), anyhow::Error> {
        *self = Self::load()?;
        Ok(())
    }

    /// The display-time configuration handed to the decision core.
    pub fn display(&self) -> DisplayConfig {
        DisplayConfig {
            fallback_image: self.fallback_image.clone(),
            default_url: self.default_click_url.clone(),
            title_english: self.title_en.clone(),
            title_french: self.title_fr.clone(),
        }
    }
}

fn parse_usize(s: &str, default: usize) -> usize {
    if s.is_empty() {
        return default;
    }
    s.parse().unwrap_or(default)
}

fn parse_u64(s: &str, default: u64) -> u64 {
    if s.is_empty() {
        return default;
    }
    s.parse().unwrap_or(default)
}

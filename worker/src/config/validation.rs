//! Setting value validation.

use regex::Regex;
use std::sync::LazyLock;

static RE_LANG_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,8}([_-][A-Za-z0-9]{1,8})*$").unwrap());

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "AMBIENT_LANG" => {
            if !value.is_empty() && !RE_LANG_TAG.is_match(value) {
                return Err("must be a language tag like 'fr' or 'en-US'".into());
            }
        }
        "FALLBACK_IMAGE" => {
            if value.is_empty() {
                return Err("must not be empty".into());
            }
        }
        "DEFAULT_CLICK_URL" => {
            if !value.starts_with('/')
                && !value.starts_with("http://")
                && !value.starts_with("https://")
            {
                return Err("must be an absolute path or http(s) URL".into());
            }
        }
        "TITLE_EN" | "TITLE_FR" => {
            if value.is_empty() {
                return Err("must not be empty".into());
            }
        }
        "QUEUE_CAPACITY" => validate_int_range(value, 1, 10_000)?,
        "SPLASH_DURATION_MS" => validate_int_range(value, 0, 60_000)?,
        // Boolean settings
        k if is_boolean_setting(k) => {
            if value != "true" && value != "false" {
                return Err("must be 'true' or 'false'".into());
            }
        }
        _ => {}
    }
    Ok(())
}

fn validate_int_range(value: &str, min: i64, max: i64) -> Result<(), String> {
    let v: i64 = value.parse().map_err(|_| "must be an integer")?;
    if v < min || v > max {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}

fn is_boolean_setting(key: &str) -> bool {
    matches!(key, "NOTIFICATION_ENABLED" | "SPLASH_ENABLED")
}

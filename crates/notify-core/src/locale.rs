//! Locale classification for default notification titles.

/// Binary language classification. Only the default-title choice
/// depends on it, so anything that is not English is grouped under
/// [`Language::French`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    French,
}

const FALLBACK_LANG: &str = "fr";

/// Classify a locale hint.
///
/// Takes the payload's `lang` if present and non-empty, else the
/// worker's ambient language, else `"fr"`. Matching is prefix-based
/// and case-insensitive: anything starting with `en` is English.
pub fn classify(payload_lang: Option<&str>, ambient_lang: Option<&str>) -> Language {
    let lang = payload_lang
        .filter(|s| !s.is_empty())
        .or_else(|| ambient_lang.filter(|s| !s.is_empty()))
        .unwrap_or(FALLBACK_LANG)
        .to_lowercase();

    if lang.starts_with("en") {
        Language::English
    } else {
        Language::French
    }
}

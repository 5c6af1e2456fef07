//! Defensive decoding of incoming push payloads.

use serde_json::Value;

/// An untrusted push payload. Every field is optional and non-string
/// values are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushPayload {
    pub title: Option<String>,
    pub body: Option<String>,
    pub icon: Option<String>,
    pub badge: Option<String>,
    pub url: Option<String>,
    pub lang: Option<String>,
}

impl PushPayload {
    fn from_value(value: &Value) -> Self {
        Self {
            title: str_field(value, "title"),
            body: str_field(value, "body"),
            icon: str_field(value, "icon"),
            badge: str_field(value, "badge"),
            url: str_field(value, "url"),
            lang: str_field(value, "lang"),
        }
    }
}

/// Result of decoding raw push event data.
///
/// A malformed payload degrades to a text-only body instead of an
/// error: a push must still surface a visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedPayload {
    /// Event data was valid JSON, or absent entirely.
    Structured(PushPayload),
    /// Event data was present but not valid JSON. `body` carries the
    /// raw text of the data.
    Degraded { body: String },
}

/// Decode raw push event data. Never fails.
///
/// Absent data yields an empty structured payload. Valid JSON that is
/// not an object (a bare string or array) yields a structured payload
/// with every field absent.
pub fn decode_payload(data: Option<&[u8]>) -> DecodedPayload {
    let Some(raw) = data else {
        return DecodedPayload::Structured(PushPayload::default());
    };

    match serde_json::from_slice::<Value>(raw) {
        Ok(value) => DecodedPayload::Structured(PushPayload::from_value(&value)),
        Err(e) => {
            tracing::debug!("Push data is not valid JSON, degrading to text body: {e}");
            DecodedPayload::Degraded {
                body: String::from_utf8_lossy(raw).into_owned(),
            }
        }
    }
}

fn str_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(|v| v.as_str()).map(str::to_string)
}

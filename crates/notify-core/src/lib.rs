//! Push notification decision core.
//!
//! Provides defensive payload decoding, locale-based title resolution,
//! notification construction, and click routing. The logic is pure;
//! the hosting runtime's notification and window APIs are abstracted
//! behind the [`NotificationHost`] capability trait.

pub mod host;
pub mod locale;
pub mod notification;
pub mod payload;
pub mod routing;

pub use host::{HostError, NotificationHost, NotificationId};
pub use locale::Language;
pub use notification::{ClickData, DEFAULT_CLICK_URL, DisplayConfig, NotificationSpec, build_notification};
pub use payload::{DecodedPayload, PushPayload, decode_payload};
pub use routing::{ClientId, ClientInfo, NavigationAction, resolve_click};

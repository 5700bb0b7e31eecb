//! EventSub envelope types.
//!
//! A delivery body is one of two shapes:
//! - Verification handshake: `{ "challenge": "<string>" }`
//! - Event notification: `{ "subscription": { "type": "..." }, "event": { ... } }`
//!
//! The envelope is request-scoped only; nothing here is ever persisted.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

/// Parsed form of an EventSub delivery body.
///
/// Parsed strictly after signature verification; the raw body string is
/// what the signature covers, not this struct.
#[derive(Debug, Deserialize)]
pub struct WebhookPayload {
    /// Present only on the one-time subscription-verification handshake.
    #[serde(default)]
    pub challenge: Option<String>,
    /// Present on event notifications.
    #[serde(default)]
    pub subscription: Option<Subscription>,
    /// Type-specific event payload, passed through to handlers unparsed.
    #[serde(default)]
    pub event: Option<Value>,
}

/// Subscription block of an event notification.
#[derive(Debug, Deserialize)]
pub struct Subscription {
    /// Discriminator selecting the handler, e.g. `channel.follow`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Subscription types the gateway routes.
///
/// Unrecognized types are kept as `Unknown` so they can be acknowledged
/// and logged instead of silently dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionType {
    Follow,
    Subscribe,
    Cheer,
    Raid,
    Unknown(String),
}

impl From<&str> for SubscriptionType {
    fn from(value: &str) -> Self {
        match value {
            "channel.follow" => Self::Follow,
            "channel.subscribe" => Self::Subscribe,
            "channel.cheer" => Self::Cheer,
            "channel.raid" => Self::Raid,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl SubscriptionType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Follow => "channel.follow",
            Self::Subscribe => "channel.subscribe",
            Self::Cheer => "channel.cheer",
            Self::Raid => "channel.raid",
            Self::Unknown(other) => other,
        }
    }
}

impl fmt::Display for SubscriptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

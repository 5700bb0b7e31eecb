//! OverlayKit EventSub Gateway.
//!
//! This library provides the inbound webhook path for OverlayKit stream
//! overlays:
//! - Signature verification over the raw EventSub delivery body
//! - The subscription-verification challenge handshake
//! - Dispatch of verified events to injected per-type handlers
//!
//! ## Request flow
//!
//! ```text
//! Twitch → POST /webhooks/twitch → verify → challenge? → dispatch → ack
//! ```

pub mod config;
pub mod dispatch;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use dispatch::{
    dispatch_event, EventHandlers, LogEventHandlers, SubscriptionType, WebhookPayload,
};
pub use web::{app_router, AppState, WebhookError};

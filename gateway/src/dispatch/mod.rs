//! Verified-event dispatch.
//!
//! Routes a verified, non-challenge envelope to the injected handler for
//! its subscription type.
//!
//! ## Dispatch flow
//!
//! ```text
//! WebhookPayload → SubscriptionType → EventHandlers method
//! ```

pub mod handlers;
pub mod types;

use anyhow::Result;
use serde_json::Value;
use tracing::info;

pub use handlers::{EventHandlers, LogEventHandlers};
pub use types::{Subscription, SubscriptionType, WebhookPayload};

/// Deliver `event` to the handler for `kind`.
///
/// An unknown subscription type is acknowledged without running a
/// handler; the provider must not retry events the gateway intentionally
/// ignores, so this is not an error.
pub async fn dispatch_event(
    handlers: &dyn EventHandlers,
    kind: &SubscriptionType,
    event: Value,
) -> Result<()> {
    info!(subscription_type = %kind, "event_routing");

    match kind {
        SubscriptionType::Follow => handlers.on_follow(event).await,
        SubscriptionType::Subscribe => handlers.on_subscribe(event).await,
        SubscriptionType::Cheer => handlers.on_cheer(event).await,
        SubscriptionType::Raid => handlers.on_raid(event).await,
        SubscriptionType::Unknown(other) => {
            info!(subscription_type = %other, "event_unhandled");
            Ok(())
        }
    }
}

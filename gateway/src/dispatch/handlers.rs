//! Injected per-event-type handlers.
//!
//! The gateway only routes. What a follow or a raid ultimately does
//! belongs to the surrounding application, which supplies its own
//! `EventHandlers` implementation. The default implementation logs the
//! payload and nothing more.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

/// Capability the dispatcher delivers verified events to.
///
/// Each method receives the opaque `event` payload unchanged. A returned
/// error is caught at the dispatch boundary and reported as an internal
/// failure; it never crosses the request boundary as a panic.
#[async_trait]
pub trait EventHandlers: Send + Sync {
    async fn on_follow(&self, event: Value) -> Result<()>;
    async fn on_subscribe(&self, event: Value) -> Result<()>;
    async fn on_cheer(&self, event: Value) -> Result<()>;
    async fn on_raid(&self, event: Value) -> Result<()>;
}

/// Logging-only handlers used until real overlay plumbing exists.
#[derive(Debug, Default, Clone)]
pub struct LogEventHandlers;

#[async_trait]
impl EventHandlers for LogEventHandlers {
    async fn on_follow(&self, event: Value) -> Result<()> {
        // TODO: push a follower alert to the overlay feed
        info!(event = %event, "follow_event");
        Ok(())
    }

    async fn on_subscribe(&self, event: Value) -> Result<()> {
        // TODO: push a subscriber alert to the overlay feed
        info!(event = %event, "subscribe_event");
        Ok(())
    }

    async fn on_cheer(&self, event: Value) -> Result<()> {
        // TODO: credit bits toward the active goal
        info!(event = %event, "cheer_event");
        Ok(())
    }

    async fn on_raid(&self, event: Value) -> Result<()> {
        // TODO: trigger the raid alert animation
        info!(event = %event, "raid_event");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_log_handlers_accept_all_events() {
        let handlers = LogEventHandlers;
        let event = json!({"user_name": "alice"});

        assert!(handlers.on_follow(event.clone()).await.is_ok());
        assert!(handlers.on_subscribe(event.clone()).await.is_ok());
        assert!(handlers.on_cheer(event.clone()).await.is_ok());
        assert!(handlers.on_raid(event).await.is_ok());
    }
}

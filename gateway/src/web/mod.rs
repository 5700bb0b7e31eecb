//! Web server module for handling inbound EventSub webhooks.
//!
//! This module provides a thin, fast endpoint that:
//! - Verifies the HMAC signature over the raw delivery body
//! - Answers the one-time subscription-verification challenge
//! - Routes verified events to the injected per-type handlers
//!
//! Deliveries are stateless; the provider retries on any non-2xx status.

pub mod error;
pub mod handlers;
pub mod signature;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub use error::WebhookError;
pub use handlers::{health, twitch_webhook, AppState, HealthResponse};
pub use signature::verify_eventsub_signature;

/// Build the gateway router.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/webhooks/twitch", post(twitch_webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

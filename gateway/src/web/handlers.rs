//! Webhook endpoint handlers.
//!
//! The webhook handler does three things, strictly in order:
//! 1. Verify the EventSub signature over the raw request body
//! 2. Answer the subscription-verification challenge
//! 3. Route the event to the injected per-type handlers
//!
//! Each delivery is handled statelessly; nothing survives the request.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{error, info, warn};

use crate::config::Config;
use crate::dispatch::{dispatch_event, EventHandlers, SubscriptionType, WebhookPayload};
use crate::web::error::WebhookError;
use crate::web::signature::verify_eventsub_signature;

/// EventSub delivery headers, all required.
pub const HEADER_MESSAGE_ID: &str = "twitch-eventsub-message-id";
pub const HEADER_TIMESTAMP: &str = "twitch-eventsub-message-timestamp";
pub const HEADER_SIGNATURE: &str = "twitch-eventsub-message-signature";

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub handlers: Arc<dyn EventHandlers>,
}

impl AppState {
    pub fn new(config: Config, handlers: Arc<dyn EventHandlers>) -> Self {
        Self {
            config: Arc::new(config),
            handlers,
        }
    }
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Twitch EventSub webhook endpoint.
///
/// The body is extracted as the raw request string: the signature covers
/// these exact bytes, so JSON parsing happens only after verification.
pub async fn twitch_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<Response, WebhookError> {
    let message_id = required_header(&headers, HEADER_MESSAGE_ID)?;
    let timestamp = required_header(&headers, HEADER_TIMESTAMP)?;
    let signature = required_header(&headers, HEADER_SIGNATURE)?;

    info!(
        message_id = %message_id,
        body_length = body.len(),
        "webhook_received"
    );

    if !verify_eventsub_signature(
        &state.config.webhook_secret,
        message_id,
        timestamp,
        &body,
        signature,
    ) {
        warn!(message_id = %message_id, "webhook_signature_rejected");
        return Err(WebhookError::SignatureRejected);
    }

    let payload: WebhookPayload = serde_json::from_str(&body)
        .map_err(|e| WebhookError::MalformedEnvelope(e.to_string()))?;

    // Subscription-verification handshake: echo the challenge and stop.
    // Only reachable after the signature check, so the endpoint cannot be
    // probed into echoing attacker-chosen values.
    if let Some(challenge) = payload.challenge {
        info!(message_id = %message_id, "webhook_challenge_answered");
        return Ok((StatusCode::OK, Json(json!({ "challenge": challenge }))).into_response());
    }

    let subscription = payload.subscription.ok_or_else(|| {
        WebhookError::MalformedEnvelope("payload missing subscription block".to_string())
    })?;
    let kind = SubscriptionType::from(subscription.kind.as_str());
    let event = payload.event.unwrap_or(Value::Null);

    if let Err(e) = dispatch_event(state.handlers.as_ref(), &kind, event).await {
        error!(
            message_id = %message_id,
            subscription_type = %kind,
            error = %e,
            "webhook_handler_failed"
        );
        return Err(WebhookError::HandlerFailed(e));
    }

    info!(
        message_id = %message_id,
        subscription_type = %kind,
        "webhook_dispatched"
    );

    Ok((StatusCode::OK, Json(json!({ "status": "ok" }))).into_response())
}

fn required_header<'a>(
    headers: &'a HeaderMap,
    name: &'static str,
) -> Result<&'a str, WebhookError> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .ok_or(WebhookError::MissingHeader(name))
}

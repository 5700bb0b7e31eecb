//! Error taxonomy for the webhook endpoint.
//!
//! Every failure terminates at the HTTP boundary with a status the
//! provider's retry logic can act on. The three classes are kept
//! distinguishable so operators can tell missing headers (400) from a
//! rejected signature (403) from an internal fault (500).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebhookError {
    /// A required EventSub header is absent or not valid UTF-8.
    #[error("missing required header {0}")]
    MissingHeader(&'static str),

    /// The signature over the raw body did not match.
    #[error("invalid signature")]
    SignatureRejected,

    /// The body passed verification but is not a well-formed envelope.
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// An injected event handler returned an error.
    #[error("event handler failed: {0}")]
    HandlerFailed(anyhow::Error),
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        // The expected signature is never part of any response body.
        let (status, message) = match self {
            WebhookError::MissingHeader(_) => {
                (StatusCode::BAD_REQUEST, "Missing required headers")
            }
            WebhookError::SignatureRejected => (StatusCode::FORBIDDEN, "Invalid signature"),
            WebhookError::MalformedEnvelope(_) | WebhookError::HandlerFailed(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

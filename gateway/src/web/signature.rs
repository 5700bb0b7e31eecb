//! Twitch EventSub webhook signature verification.
//!
//! EventSub signs webhook deliveries using HMAC-SHA256.
//! Reference: https://dev.twitch.tv/docs/eventsub/handling-webhook-events/#verifying-the-message

use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::warn;

type HmacSha256 = Hmac<Sha256>;

/// Prefix Twitch puts in front of the hex digest in the signature header.
const SIGNATURE_PREFIX: &str = "sha256=";

/// Verify a Twitch EventSub webhook signature.
///
/// EventSub deliveries carry three headers used for verification:
/// - message id: opaque identifier, unique per delivery attempt
/// - timestamp: when Twitch sent the message
/// - signature: `"sha256=" + hex(HMAC-SHA256(secret, message_id + timestamp + body))`
///
/// The digest covers the exact raw request body. Re-serializing parsed
/// JSON before verification produces a different byte sequence and the
/// signature no longer matches.
///
/// # Arguments
///
/// * `secret` - The shared signing secret registered with Twitch
/// * `message_id` - The `Twitch-Eventsub-Message-Id` header value
/// * `timestamp` - The `Twitch-Eventsub-Message-Timestamp` header value
/// * `raw_body` - The unmodified request body
/// * `signature` - The `Twitch-Eventsub-Message-Signature` header value
///
/// # Returns
///
/// `true` if the signature is valid, `false` otherwise.
pub fn verify_eventsub_signature(
    secret: &str,
    message_id: &str,
    timestamp: &str,
    raw_body: &str,
    signature: &str,
) -> bool {
    // Fail closed on empty inputs, before any HMAC work
    if secret.is_empty() || message_id.is_empty() || timestamp.is_empty() || signature.is_empty() {
        warn!(
            has_secret = !secret.is_empty(),
            has_message_id = !message_id.is_empty(),
            has_timestamp = !timestamp.is_empty(),
            has_signature = !signature.is_empty(),
            "eventsub_signature_missing_fields"
        );
        return false;
    }

    // Compute expected signature: HMAC-SHA256(secret, message_id + timestamp + raw_body).
    // The message is the plain concatenation with no separator; that is the
    // provider's signing convention and must not be changed.
    let mut mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(m) => m,
        Err(_) => {
            warn!("eventsub_signature_invalid_key");
            return false;
        }
    };

    mac.update(message_id.as_bytes());
    mac.update(timestamp.as_bytes());
    mac.update(raw_body.as_bytes());

    let expected = format!(
        "{}{}",
        SIGNATURE_PREFIX,
        hex::encode(mac.finalize().into_bytes())
    );

    // Constant-time comparison to prevent timing attacks
    let valid = constant_time_compare(&expected, signature);

    if !valid {
        warn!(
            message_id = %message_id,
            provided_length = signature.len(),
            "eventsub_signature_mismatch"
        );
    }

    valid
}

/// Constant-time string comparison to prevent timing attacks.
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}

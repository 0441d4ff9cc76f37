//! Bearer credential decoding.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server signs credentials; the client only reads the claims segment to
//! learn who is signed in and when the credential stops being valid. Nothing
//! here verifies signatures.
//!
//! ERROR HANDLING
//! ==============
//! Every malformed input collapses to `None`, and an undecodable credential
//! always counts as expired, so callers can only ever see a fully readable
//! credential or none at all.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

/// Claims carried in the credential payload segment.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Claims {
    /// Subject; the account email.
    pub sub: String,
    /// Numeric user identifier.
    pub id: i64,
    /// Expiry in seconds since the Unix epoch.
    pub exp: i64,
    /// Issue time in seconds since the Unix epoch, when present.
    #[serde(default)]
    pub iat: Option<i64>,
}

impl Claims {
    /// Whether these claims are expired at `now_ms` (milliseconds since epoch).
    #[must_use]
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        self.exp.saturating_mul(1000) <= now_ms
    }
}

/// Decode the claims segment of a three-part credential.
#[must_use]
pub fn decode(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return None;
    };
    if payload.is_empty() {
        return None;
    }
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// `true` when the credential cannot be decoded or its expiry has passed.
#[must_use]
pub fn is_expired(token: &str, now_ms: i64) -> bool {
    decode(token).is_none_or(|claims| claims.is_expired_at(now_ms))
}

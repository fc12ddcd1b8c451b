//! Session Tokens
//!
//! Stateless session cookie value:
//!
//! ```text
//! {user_id}.{role}.{expires_at_ms}.{base64url(HMAC-SHA256(secret, "session:" || payload))}
//! ```
//!
//! where `payload` is everything before the last dot. Verification is a
//! pure function of (token, secret, now), so a forged, tampered or expired
//! cookie simply yields no session.

use kernel::id::UserId;
use platform::crypto::{from_base64url, hmac_sha256, to_base64url, verify_hmac_sha256};

use crate::domain::entity::auth_session::AuthSession;
use crate::domain::value_object::user_role::UserRole;

const TOKEN_DOMAIN: &[u8] = b"session:";

fn signing_input(payload: &str) -> Vec<u8> {
    [TOKEN_DOMAIN, payload.as_bytes()].concat()
}

/// Generate signed session token
pub fn sign_session_token(session: &AuthSession, secret: &[u8]) -> String {
    let payload = format!(
        "{}.{}.{}",
        session.user_id.value(),
        session.user_role.code(),
        session.expires_at_ms
    );
    let signature = hmac_sha256(secret, &signing_input(&payload));

    format!("{}.{}", payload, to_base64url(&signature))
}

/// Parse and verify session token
pub fn verify_session_token(token: &str, secret: &[u8], now_ms: i64) -> Option<AuthSession> {
    let (payload, signature_b64) = token.rsplit_once('.')?;
    let signature = from_base64url(signature_b64).ok()?;

    if !verify_hmac_sha256(secret, &signing_input(payload), &signature) {
        return None;
    }

    let mut parts = payload.split('.');
    let user_id = parts.next()?.parse::<i64>().ok()?;
    let user_role = UserRole::parse(parts.next()?)?;
    let expires_at_ms = parts.next()?.parse::<i64>().ok()?;
    if parts.next().is_some() {
        return None;
    }

    let session = AuthSession {
        user_id: UserId::from_raw(user_id),
        user_role,
        expires_at_ms,
    };

    (!session.is_expired_at(now_ms)).then_some(session)
}

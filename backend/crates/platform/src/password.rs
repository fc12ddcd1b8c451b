//! Password Digests
//!
//! Credentials are matched by equality on a stored digest, so the digest
//! must be deterministic:
//! - no pepper: lowercase hex SHA-256 of the UTF-8 password
//! - pepper: lowercase hex HMAC-SHA256 keyed by the pepper
//!
//! Switching the pepper on invalidates every stored digest; provisioned
//! users must be re-seeded with the same pepper.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::{hmac_sha256, sha256};

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
///
/// No policy is applied: sign-in must accept whatever was provisioned.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    pub fn new(raw: String) -> Self {
        Self(raw)
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Digest this password for storage or lookup
    pub fn digest(&self, pepper: Option<&[u8]>) -> PasswordDigest {
        let bytes = match pepper {
            Some(pepper) => hmac_sha256(pepper, self.as_bytes()),
            None => sha256(self.as_bytes()),
        };
        PasswordDigest(hex::encode(bytes))
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Password Digest (Safe to store)
// ============================================================================

/// Fixed-length hex digest, as stored in `users.password`
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PasswordDigest").field(&"[HASH]").finish()
    }
}

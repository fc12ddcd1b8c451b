//! Auth Session Entity
//!
//! An authenticated session. Never persisted: it travels inside a signed
//! cookie token and is rebuilt on every request.

use std::time::Duration;

use kernel::id::UserId;

use crate::domain::value_object::user_role::UserRole;

/// Auth session entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthSession {
    /// Authenticated user
    pub user_id: UserId,
    /// User role at sign-in time
    pub user_role: UserRole,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
}

impl AuthSession {
    /// Create a session starting at `now_ms`
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn new(user_id: UserId, user_role: UserRole, now_ms: i64, ttl: Duration) -> Self {
        let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);

        Self {
            user_id,
            user_role,
            expires_at_ms: now_ms.saturating_add(ttl_ms),
        }
    }

    /// Check if session has expired at `now_ms`
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        now_ms >= self.expires_at_ms
    }

    pub fn is_admin(&self) -> bool {
        self.user_role.is_admin()
    }
}

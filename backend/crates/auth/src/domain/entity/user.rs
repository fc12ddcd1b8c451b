//! User Entity
//!
//! Users are created by provisioning only; the application never updates them.

use kernel::id::UserId;
use platform::password::PasswordDigest;

use crate::domain::value_object::user_role::UserRole;

/// User entity, as returned by a credential lookup
///
/// The stored digest is not carried: a matching row already proves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Row id assigned by the store
    pub user_id: UserId,
    /// Unique login name
    pub username: String,
    pub user_role: UserRole,
}

/// User to be inserted by provisioning
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_digest: PasswordDigest,
    pub user_role: UserRole,
}

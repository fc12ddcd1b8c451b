//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;
use platform::password::PasswordDigest;

use crate::domain::entity::user::{NewUser, User};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Find the single user whose name and stored digest both match
    async fn find_by_credentials(
        &self,
        username: &str,
        password_digest: &PasswordDigest,
    ) -> AuthResult<Option<User>>;

    /// Check if user name exists
    async fn exists_by_username(&self, username: &str) -> AuthResult<bool>;

    /// Create a new user, returning its row id
    async fn create(&self, user: &NewUser) -> AuthResult<UserId>;
}

//! Seed Users Use Case
//!
//! Inserts provisioned users that do not exist yet. Existing users are left
//! untouched, so running it on every start is harmless.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::NewUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_role::UserRole;
use crate::error::{AuthError, AuthResult};

/// User to provision
#[derive(Debug)]
pub struct SeedUser {
    pub username: String,
    pub password: ClearTextPassword,
    pub user_role: UserRole,
}

/// Seed users use case
pub struct SeedUsersUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SeedUsersUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Returns how many users were created
    pub async fn execute(&self, seeds: Vec<SeedUser>) -> AuthResult<usize> {
        let mut created = 0;

        for seed in seeds {
            if seed.username.is_empty() {
                return Err(AuthError::InvalidUser("empty user name".to_string()));
            }

            if self.user_repo.exists_by_username(&seed.username).await? {
                tracing::debug!(username = %seed.username, "Seed user already present");
                continue;
            }

            let user_id = self
                .user_repo
                .create(&NewUser {
                    password_digest: seed.password.digest(self.config.pepper()),
                    username: seed.username.clone(),
                    user_role: seed.user_role,
                })
                .await?;

            tracing::info!(
                user_id = %user_id,
                username = %seed.username,
                user_role = %seed.user_role,
                "Provisioned user"
            );
            created += 1;
        }

        Ok(created)
    }
}

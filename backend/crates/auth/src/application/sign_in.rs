//! Sign In Use Case
//!
//! Authenticates a user with one parameterized credential lookup and
//! creates a signed session.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::metrics::LoginMetrics;
use crate::application::session_token::sign_session_token;
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub username: String,
    pub password: ClearTextPassword,
}

/// Sign in output
pub struct SignInOutput {
    /// Session token for cookie
    pub session_token: String,
    pub session: AuthSession,
}

/// Sign in use case
pub struct SignInUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    metrics: Arc<LoginMetrics>,
    config: Arc<AuthConfig>,
}

impl<U> SignInUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, metrics: Arc<LoginMetrics>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            metrics,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput, now_ms: i64) -> AuthResult<SignInOutput> {
        let digest = input.password.digest(self.config.pepper());

        let Some(user) = self
            .user_repo
            .find_by_credentials(&input.username, &digest)
            .await?
        else {
            self.metrics.record_failure();
            return Err(AuthError::InvalidCredentials);
        };

        let session = AuthSession::new(user.user_id, user.user_role, now_ms, self.config.session_ttl);
        let session_token = sign_session_token(&session, &self.config.session_secret);

        self.metrics.record_success();
        tracing::info!(
            user_id = %user.user_id,
            user_role = %user.user_role,
            "User signed in"
        );

        Ok(SignInOutput {
            session_token,
            session,
        })
    }
}

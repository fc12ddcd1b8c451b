//! Check Session Use Case
//!
//! Rebuilds the session from the request's cookie.

use std::sync::Arc;

use axum::http::HeaderMap;
use platform::cookie::extract_cookie;

use crate::application::config::AuthConfig;
use crate::application::session_token::verify_session_token;
use crate::domain::entity::auth_session::AuthSession;

/// Check session use case
pub struct CheckSessionUseCase {
    config: Arc<AuthConfig>,
}

impl CheckSessionUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Valid, unexpired session carried by `headers`, if any
    pub fn execute(&self, headers: &HeaderMap, now_ms: i64) -> Option<AuthSession> {
        let token = extract_cookie(headers, &self.config.session_cookie_name)?;
        let session = verify_session_token(&token, &self.config.session_secret, now_ms);

        if session.is_none() {
            tracing::debug!("Ignoring invalid or expired session cookie");
        }
        session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::session_token::sign_session_token;
    use crate::domain::value_object::user_role::UserRole;
    use axum::http::{HeaderValue, header};
    use kernel::id::UserId;

    fn headers_with(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn test_reads_session_cookie() {
        let config = Arc::new(AuthConfig::development());
        let session = AuthSession {
            user_id: UserId::from_raw(3),
            user_role: UserRole::User,
            expires_at_ms: 1_000,
        };
        let token = sign_session_token(&session, &config.session_secret);
        let use_case = CheckSessionUseCase::new(config);

        let headers = headers_with(&format!("csrf_nonce=abc; session={token}"));
        assert_eq!(use_case.execute(&headers, 0), Some(session));
        assert_eq!(use_case.execute(&headers, 1_000), None);
    }

    #[test]
    fn test_missing_or_garbage_cookie() {
        let use_case = CheckSessionUseCase::new(Arc::new(AuthConfig::development()));

        assert_eq!(use_case.execute(&HeaderMap::new(), 0), None);
        assert_eq!(use_case.execute(&headers_with("session=1.admin.99"), 0), None);
    }
}

//! Auth Middleware
//!
//! Guards for protected routes. The session is rebuilt from the cookie on
//! every request and handed to handlers as an `Extension<AuthSession>`.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use chrono::Utc;

use crate::application::config::AuthConfig;
use crate::application::guard::{Access, Denial, authorize};
use crate::application::CheckSessionUseCase;

/// Both denials send the browser back to the login page
impl IntoResponse for Denial {
    fn into_response(self) -> Response {
        Redirect::to("/login").into_response()
    }
}

/// Middleware that requires a valid auth session
pub async fn require_login(
    State(config): State<Arc<AuthConfig>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, Denial> {
    enforce(Access::RequiresLogin, config, req, next).await
}

/// Middleware that requires a valid admin session
pub async fn require_admin(
    State(config): State<Arc<AuthConfig>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, Denial> {
    enforce(Access::RequiresAdmin, config, req, next).await
}

async fn enforce(
    access: Access,
    config: Arc<AuthConfig>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Denial> {
    let session = CheckSessionUseCase::new(config)
        .execute(req.headers(), Utc::now().timestamp_millis());

    if let Err(denial) = authorize(access, session.as_ref()) {
        tracing::info!(path = %req.uri().path(), reason = %denial, "Access denied");
        return Err(denial);
    }

    if let Some(session) = session {
        req.extensions_mut().insert(session);
    }

    Ok(next.run(req).await)
}

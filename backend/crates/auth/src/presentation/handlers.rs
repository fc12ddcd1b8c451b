//! HTTP Handlers

use std::sync::Arc;

use axum::Form;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::response::{AppendHeaders, IntoResponse, Redirect, Response};
use chrono::Utc;
use platform::cookie::set_cookie_header;
use platform::csrf::CsrfProtect;
use platform::html::render;
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::metrics::LoginMetrics;
use crate::application::{SignInInput, SignInUseCase};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::LoginForm;
use crate::presentation::views::{INVALID_CREDENTIALS_MESSAGE, LoginTemplate};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub csrf: Arc<CsrfProtect>,
    pub metrics: Arc<LoginMetrics>,
}

// ============================================================================
// Sign In
// ============================================================================

/// GET /login
pub async fn login_page<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    render_login(&state.csrf, &headers, None)
}

/// POST /login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
    Form(form): Form<LoginForm>,
) -> AuthResult<Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(
        state.repo.clone(),
        state.metrics.clone(),
        state.config.clone(),
    );

    let input = SignInInput {
        username: form.username,
        password: ClearTextPassword::new(form.password),
    };

    match use_case.execute(input, Utc::now().timestamp_millis()).await {
        Ok(output) => {
            let cookie = set_cookie_header(&state.config.session_cookie(), &output.session_token);

            Ok((
                AppendHeaders([(header::SET_COOKIE, cookie)]),
                Redirect::to("/dashboard"),
            )
                .into_response())
        }
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!("Invalid login attempt");
            render_login(&state.csrf, &headers, Some(INVALID_CREDENTIALS_MESSAGE))
        }
        Err(e) => Err(e),
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn render_login(
    csrf: &CsrfProtect,
    headers: &HeaderMap,
    error: Option<&str>,
) -> AuthResult<Response> {
    let issued = csrf.issue(headers);
    let mut response = render(&LoginTemplate {
        csrf_token: &issued.token,
        error,
    })?
    .into_response();

    issued.attach_cookie(&mut response);
    Ok(response)
}

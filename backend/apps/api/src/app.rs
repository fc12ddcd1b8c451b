//! Router Composition
//!
//! Layer order, outermost first:
//! 1. request tracing
//! 2. security headers, `Server` removal
//! 3. CSRF check on state-changing requests
//! 4. per-route session guards (inside the auth/board routers)

use std::sync::Arc;

use auth::presentation::AuthAppState;
use auth::{AuthConfig, LoginMetrics, SqliteAuthRepository, auth_router};
use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use board::presentation::BoardAppState;
use board::{SqliteBoardRepository, board_router};
use platform::csrf::{CsrfConfig, CsrfProtect, require_csrf_token};
use platform::metrics::metrics_handler;
use platform::security_headers::{SecurityHeadersConfig, apply_security_headers};
use prometheus::Registry;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

/// Build the full application router over `pool`
pub fn build_router(pool: SqlitePool, auth_config: AuthConfig) -> anyhow::Result<Router> {
    let auth_config = Arc::new(auth_config);

    let registry = Arc::new(Registry::new());
    let metrics = Arc::new(LoginMetrics::register(&registry)?);

    // Same key as sessions; the "csrf:" / "session:" prefixes keep the MACs apart.
    let csrf = Arc::new(CsrfProtect::new(CsrfConfig::new(
        auth_config.session_secret,
        auth_config.cookie_secure,
    )));

    let auth_state = AuthAppState {
        repo: Arc::new(SqliteAuthRepository::new(pool.clone())),
        config: auth_config.clone(),
        csrf: csrf.clone(),
        metrics,
    };

    let board_state = BoardAppState {
        repo: Arc::new(SqliteBoardRepository::new(pool)),
        csrf: csrf.clone(),
    };

    let metrics_routes = Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(registry);

    let router = Router::new()
        .merge(auth_router(auth_state))
        .merge(board_router(board_state, auth_config))
        .merge(metrics_routes)
        .layer(from_fn_with_state(csrf, require_csrf_token));

    let router = apply_security_headers(router, &SecurityHeadersConfig::default())?;

    Ok(router.layer(TraceLayer::new_for_http()))
}

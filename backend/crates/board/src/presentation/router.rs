//! Board Router

use std::sync::Arc;

use auth::AuthConfig;
use auth::middleware::{require_admin, require_login};
use axum::middleware::from_fn_with_state;
use axum::{
    Router,
    routing::{get, post},
};

use crate::domain::repository::CommentRepository;
use crate::presentation::handlers::{self, BoardAppState};

/// Create the Board router
///
/// `/` is public, `/dashboard` and `/submit_comment` need a session,
/// `/admin` needs an admin session.
pub fn board_router<R>(state: BoardAppState<R>, auth_config: Arc<AuthConfig>) -> Router
where
    R: CommentRepository + Clone + Send + Sync + 'static,
{
    let member = Router::new()
        .route("/dashboard", get(handlers::dashboard::<R>))
        .route("/submit_comment", post(handlers::submit_comment::<R>))
        .route_layer(from_fn_with_state(auth_config.clone(), require_login));

    let admin = Router::new()
        .route("/admin", get(handlers::admin))
        .route_layer(from_fn_with_state(auth_config, require_admin));

    Router::new()
        .route("/", get(handlers::index))
        .merge(member)
        .merge(admin)
        .with_state(state)
}

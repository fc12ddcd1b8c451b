//! Auth Router

use axum::{Router, routing::get};

use crate::domain::repository::UserRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router for any repository implementation
pub fn auth_router<R>(state: AuthAppState<R>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/login",
            get(handlers::login_page::<R>).post(handlers::login::<R>),
        )
        .with_state(state)
}

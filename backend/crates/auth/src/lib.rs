//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases, session tokens, the access guard
//! - `infra/` - SQLite implementation
//! - `presentation/` - HTTP handlers, views, middleware, router
//!
//! ## Features
//! - Sign in with username + password (`GET|POST /login`)
//! - Stateless signed session cookies (HMAC-SHA256)
//! - Role-based access (User, Admin) for other crates' routes
//! - Login success/failure counters
//!
//! ## Security Model
//! - One parameterized lookup on (username, password digest)
//! - Failures never reveal whether the user exists
//! - Sessions are re-verified from the cookie on every request

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::metrics::LoginMetrics;
pub use domain::entity::auth_session::AuthSession;
pub use error::{AuthError, AuthResult};
pub use infra::sqlite::SqliteAuthRepository;
pub use presentation::router::auth_router;

pub mod middleware {
    pub use crate::presentation::middleware::*;
}

//! Application Layer
//!
//! Use cases and application services.

pub mod check_session;
pub mod config;
pub mod guard;
pub mod metrics;
pub mod seed_users;
pub mod session_token;
pub mod sign_in;

// Re-exports
pub use check_session::CheckSessionUseCase;
pub use config::AuthConfig;
pub use guard::{Access, Denial, authorize};
pub use metrics::LoginMetrics;
pub use seed_users::{SeedUser, SeedUsersUseCase};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};

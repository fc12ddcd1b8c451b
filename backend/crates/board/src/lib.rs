//! Board (Comments) Backend Module
//!
//! Per-user comment board, home page and admin panel.
//!
//! Module structure:
//! - `domain/` - Comment entity, repository trait
//! - `application/` - Submit / list use cases
//! - `infra/` - SQLite implementation
//! - `presentation/` - Handlers, views, router
//!
//! Access control comes from `auth::middleware`; handlers only ever see the
//! `AuthSession` that middleware verified, and every query is scoped to its
//! user id.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use error::{BoardError, BoardResult};
pub use infra::sqlite::SqliteBoardRepository;
pub use presentation::router::board_router;

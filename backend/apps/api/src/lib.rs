//! API Application
//!
//! Configuration, provisioning and router composition for the server
//! binary. Kept in a library so the HTTP flow can be tested end to end.

pub mod app;
pub mod config;
pub mod provision;

pub use app::build_router;
pub use config::AppConfig;
pub use provision::provision;

//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, HMAC, Base64)
//! - Password digests (SHA-256 / peppered HMAC-SHA256)
//! - Cookie management
//! - Anti-forgery (CSRF) tokens and middleware
//! - Security response headers
//! - Prometheus exposition
//! - SQLite pool and schema helpers
//! - Escaping HTML rendering

pub mod cookie;
pub mod crypto;
pub mod csrf;
pub mod database;
pub mod html;
pub mod metrics;
pub mod password;
pub mod security_headers;

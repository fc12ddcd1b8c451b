//! Form DTOs (Data Transfer Objects)

use serde::Deserialize;

// ============================================================================
// Sign In
// ============================================================================

/// `POST /login` form body
///
/// Missing fields read as empty and simply fail the credential check.
/// The `csrf_token` field is consumed by the CSRF middleware.
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

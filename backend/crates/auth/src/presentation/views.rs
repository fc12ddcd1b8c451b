//! Login Views

use askama::Template;

/// Shown on a failed sign-in; identical for unknown users and wrong passwords
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials!";

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate<'a> {
    pub csrf_token: &'a str,
    pub error: Option<&'a str>,
}

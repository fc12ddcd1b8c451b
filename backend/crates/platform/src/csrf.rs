//! Anti-forgery (CSRF) Protection
//!
//! Signed double-submit scheme:
//! - each browser gets a random nonce in an HttpOnly cookie
//! - forms embed `base64url(HMAC-SHA256(secret, "csrf:" || nonce))`
//! - state-changing requests must echo that token in the `csrf_token`
//!   form field or the `X-CSRFToken` header
//!
//! A third-party page can make the browser send the cookie but cannot read
//! it, and cannot forge the HMAC without the server secret.

use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, Method, Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use thiserror::Error;

use crate::cookie::{CookieConfig, SameSite, extract_cookie, set_cookie_header};
use crate::crypto::{constant_time_eq, from_base64url, hmac_sha256, random_bytes, to_base64url};

/// Form field carrying the token
pub const CSRF_FIELD_NAME: &str = "csrf_token";

/// Header carrying the token (for non-form clients)
pub const CSRF_HEADER_NAME: &str = "x-csrftoken";

const NONCE_LEN: usize = 32;

/// Matches axum's default request body limit
const MAX_FORM_BYTES: usize = 2 * 1024 * 1024;

const TOKEN_DOMAIN: &[u8] = b"csrf:";

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CsrfError {
    #[error("The CSRF token is missing.")]
    TokenMissing,

    #[error("The CSRF session token is missing.")]
    NonceMissing,

    #[error("The CSRF token is invalid.")]
    TokenInvalid,

    #[error("The request body could not be read.")]
    UnreadableBody,
}

impl IntoResponse for CsrfError {
    fn into_response(self) -> Response {
        tracing::warn!(reason = %self, "Rejected state-changing request");
        AppError::bad_request(self.to_string()).into_response()
    }
}

// ============================================================================
// Configuration
// ============================================================================

#[derive(Debug, Clone)]
pub struct CsrfConfig {
    /// Cookie holding the per-browser nonce
    pub cookie: CookieConfig,
    /// HMAC key (32 bytes)
    pub secret: [u8; 32],
}

impl CsrfConfig {
    pub fn new(secret: [u8; 32], cookie_secure: bool) -> Self {
        Self {
            cookie: CookieConfig {
                name: "csrf_nonce".to_string(),
                secure: cookie_secure,
                http_only: true,
                same_site: SameSite::Lax,
                path: "/".to_string(),
                max_age_secs: None,
            },
            secret,
        }
    }
}

// ============================================================================
// Token issuing / verification
// ============================================================================

/// Token to embed in a rendered form
#[derive(Debug, Clone)]
pub struct IssuedCsrfToken {
    pub token: String,
    /// Present when a fresh nonce was minted for this browser
    pub set_cookie: Option<HeaderValue>,
}

impl IssuedCsrfToken {
    /// Attach the freshly minted nonce cookie, if any, to a rendered page
    pub fn attach_cookie(&self, response: &mut Response) {
        if let Some(cookie) = &self.set_cookie {
            response
                .headers_mut()
                .append(header::SET_COOKIE, cookie.clone());
        }
    }
}

#[derive(Debug, Clone)]
pub struct CsrfProtect {
    config: CsrfConfig,
}

impl CsrfProtect {
    pub fn new(config: CsrfConfig) -> Self {
        Self { config }
    }

    /// Token for the browser that sent `headers`, minting a nonce if needed
    pub fn issue(&self, headers: &HeaderMap) -> IssuedCsrfToken {
        if let Some(nonce) = self.nonce_from(headers) {
            return IssuedCsrfToken {
                token: self.token_for(&nonce),
                set_cookie: None,
            };
        }

        let nonce = random_bytes(NONCE_LEN);
        IssuedCsrfToken {
            token: self.token_for(&nonce),
            set_cookie: Some(set_cookie_header(
                &self.config.cookie,
                &to_base64url(&nonce),
            )),
        }
    }

    /// Check a submitted token against the browser's nonce cookie
    pub fn verify(&self, headers: &HeaderMap, submitted: Option<&str>) -> Result<(), CsrfError> {
        let submitted = submitted
            .filter(|token| !token.is_empty())
            .ok_or(CsrfError::TokenMissing)?;
        let nonce = self.nonce_from(headers).ok_or(CsrfError::NonceMissing)?;

        let expected = self.token_for(&nonce);
        if constant_time_eq(expected.as_bytes(), submitted.as_bytes()) {
            Ok(())
        } else {
            Err(CsrfError::TokenInvalid)
        }
    }

    fn nonce_from(&self, headers: &HeaderMap) -> Option<Vec<u8>> {
        let raw = extract_cookie(headers, &self.config.cookie.name)?;
        from_base64url(&raw)
            .ok()
            .filter(|nonce| nonce.len() == NONCE_LEN)
    }

    fn token_for(&self, nonce: &[u8]) -> String {
        let message = [TOKEN_DOMAIN, nonce].concat();
        to_base64url(&hmac_sha256(&self.config.secret, &message))
    }
}

// ============================================================================
// Middleware
// ============================================================================

fn is_state_changing(method: &Method) -> bool {
    matches!(
        *method,
        Method::POST | Method::PUT | Method::PATCH | Method::DELETE
    )
}

fn submitted_token(headers: &HeaderMap, body: &Bytes) -> Option<String> {
    if let Some(token) = headers
        .get(CSRF_HEADER_NAME)
        .and_then(|value| value.to_str().ok())
    {
        return Some(token.to_string());
    }

    serde_urlencoded::from_bytes::<Vec<(String, String)>>(body)
        .ok()?
        .into_iter()
        .find_map(|(name, value)| (name == CSRF_FIELD_NAME).then_some(value))
}

/// Reject state-changing requests without a valid token before any handler runs
pub async fn require_csrf_token(
    State(csrf): State<Arc<CsrfProtect>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, CsrfError> {
    if !is_state_changing(req.method()) {
        return Ok(next.run(req).await);
    }

    let (parts, body) = req.into_parts();
    let bytes = axum::body::to_bytes(body, MAX_FORM_BYTES)
        .await
        .map_err(|_| CsrfError::UnreadableBody)?;

    let submitted = submitted_token(&parts.headers, &bytes);
    csrf.verify(&parts.headers, submitted.as_deref())?;

    let req = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(req).await)
}

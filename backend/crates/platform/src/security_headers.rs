//! Security Response Headers
//!
//! Applied to every response:
//! - `X-Content-Type-Options: nosniff`
//! - `X-Frame-Options: SAMEORIGIN`
//! - `Referrer-Policy: strict-origin-when-cross-origin`
//! - `Content-Security-Policy` from an explicit origin allow-list
//! - `Server` is removed so the stack version is never disclosed

use axum::Router;
use axum::http::header::{self, HeaderName, HeaderValue, InvalidHeaderValue};
use axum::response::Response;
use tower_http::set_header::SetResponseHeaderLayer;

/// Content Security Policy allow-list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSecurityPolicy {
    pub default_src: Vec<String>,
    pub script_src: Vec<String>,
    pub style_src: Vec<String>,
}

impl Default for ContentSecurityPolicy {
    fn default() -> Self {
        Self {
            default_src: vec!["'self'".to_string()],
            script_src: vec![
                "'self'".to_string(),
                "https://maxcdn.bootstrapcdn.com".to_string(),
                "https://code.jquery.com".to_string(),
                "https://cdnjs.cloudflare.com".to_string(),
            ],
            style_src: vec![
                "'self'".to_string(),
                "https://maxcdn.bootstrapcdn.com".to_string(),
            ],
        }
    }
}

impl ContentSecurityPolicy {
    /// Render as a header value, skipping empty directives
    pub fn to_header_string(&self) -> String {
        [
            ("default-src", &self.default_src),
            ("script-src", &self.script_src),
            ("style-src", &self.style_src),
        ]
        .into_iter()
        .filter(|(_, sources)| !sources.is_empty())
        .map(|(directive, sources)| format!("{} {}", directive, sources.join(" ")))
        .collect::<Vec<_>>()
        .join("; ")
    }
}

/// Security header configuration
#[derive(Debug, Clone)]
pub struct SecurityHeadersConfig {
    pub content_security_policy: ContentSecurityPolicy,
    pub frame_options: String,
    pub referrer_policy: String,
}

impl Default for SecurityHeadersConfig {
    fn default() -> Self {
        Self {
            content_security_policy: ContentSecurityPolicy::default(),
            frame_options: "SAMEORIGIN".to_string(),
            referrer_policy: "strict-origin-when-cross-origin".to_string(),
        }
    }
}

impl SecurityHeadersConfig {
    /// Header pairs to set on every response
    pub fn header_pairs(&self) -> Result<Vec<(HeaderName, HeaderValue)>, InvalidHeaderValue> {
        Ok(vec![
            (
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ),
            (
                header::X_FRAME_OPTIONS,
                HeaderValue::from_str(&self.frame_options)?,
            ),
            (
                header::REFERRER_POLICY,
                HeaderValue::from_str(&self.referrer_policy)?,
            ),
            (
                header::CONTENT_SECURITY_POLICY,
                HeaderValue::from_str(&self.content_security_policy.to_header_string())?,
            ),
        ])
    }
}

/// Remove any `Server` header set by inner layers
pub async fn strip_server_header(mut response: Response) -> Response {
    response.headers_mut().remove(header::SERVER);
    response
}

/// Wrap a router so every response carries the configured headers
pub fn apply_security_headers<S>(
    router: Router<S>,
    config: &SecurityHeadersConfig,
) -> Result<Router<S>, InvalidHeaderValue>
where
    S: Clone + Send + Sync + 'static,
{
    let router = config
        .header_pairs()?
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::overriding(name, value))
        });

    Ok(router.layer(axum::middleware::map_response(strip_server_header)))
}

//! Prometheus Exposition
//!
//! Each process owns one [`Registry`]; crates register their counters into it
//! at startup and `/metrics` renders it in the text exposition format.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use prometheus::{Encoder, Registry, TextEncoder};

/// Render every metric family in `registry` as Prometheus text
pub fn render_text(registry: &Registry) -> prometheus::Result<String> {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&registry.gather(), &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}

/// GET /metrics
pub async fn metrics_handler(State(registry): State<Arc<Registry>>) -> Response {
    match render_text(&registry) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, TextEncoder::new().format_type().to_string())],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode metrics");
            AppError::internal("Failed to encode metrics").into_response()
        }
    }
}

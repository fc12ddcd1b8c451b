//! Board Error Types

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type BoardResult<T> = Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl BoardError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BoardError::Database(_) | BoardError::Template(_) => ErrorKind::InternalServerError,
        }
    }

    fn log(&self) {
        match self {
            BoardError::Database(e) => tracing::error!(error = %e, "Board database error"),
            BoardError::Template(e) => tracing::error!(error = %e, "Board template error"),
        }
    }
}

impl IntoResponse for BoardError {
    fn into_response(self) -> Response {
        self.log();
        AppError::new(self.kind(), "Internal server error").into_response()
    }
}

//! Form DTOs (Data Transfer Objects)

use serde::Deserialize;

// ============================================================================
// Submit Comment
// ============================================================================

/// `POST /submit_comment` form body
///
/// `comment` is required; an empty string is a valid comment.
/// The `csrf_token` field is consumed by the CSRF middleware.
#[derive(Debug, Deserialize)]
pub struct CommentForm {
    pub comment: String,
}

//! Application Layer

pub mod list_comments;
pub mod submit_comment;

pub use list_comments::ListCommentsUseCase;
pub use submit_comment::SubmitCommentUseCase;

//! Submit Comment Use Case

use std::sync::Arc;

use auth::AuthSession;
use kernel::id::CommentId;

use crate::domain::repository::CommentRepository;
use crate::error::BoardResult;

pub struct SubmitCommentUseCase<R>
where
    R: CommentRepository,
{
    repo: Arc<R>,
}

impl<R> SubmitCommentUseCase<R>
where
    R: CommentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Store `text` unchanged under the session's user
    pub async fn execute(&self, session: &AuthSession, text: &str) -> BoardResult<CommentId> {
        let comment_id = self.repo.create(session.user_id, text).await?;

        tracing::info!(
            user_id = %session.user_id,
            comment_id = %comment_id,
            length = text.len(),
            "Comment stored"
        );

        Ok(comment_id)
    }
}

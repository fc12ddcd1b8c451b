//! Repository Traits

use kernel::id::{CommentId, UserId};

use crate::domain::entities::Comment;
use crate::error::BoardResult;

/// Comment repository trait
#[trait_variant::make(CommentRepository: Send)]
pub trait LocalCommentRepository {
    /// Append a comment owned by `user_id`
    async fn create(&self, user_id: UserId, text: &str) -> BoardResult<CommentId>;

    /// Comments owned by `user_id`, oldest first
    async fn list_by_user(&self, user_id: UserId) -> BoardResult<Vec<Comment>>;
}

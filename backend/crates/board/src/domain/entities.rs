//! Domain Entities

use kernel::id::{CommentId, UserId};

/// A stored comment. Created on behalf of the signed-in user, never updated.
///
/// `text` is kept exactly as submitted; escaping is the view's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub comment_id: CommentId,
    pub user_id: UserId,
    pub text: String,
}

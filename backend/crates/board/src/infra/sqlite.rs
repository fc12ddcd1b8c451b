//! SQLite Repository Implementation

use kernel::id::{CommentId, UserId};
use sqlx::SqlitePool;

use crate::domain::entities::Comment;
use crate::domain::repository::CommentRepository;
use crate::error::BoardResult;

#[derive(Clone)]
pub struct SqliteBoardRepository {
    pool: SqlitePool,
}

impl SqliteBoardRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CommentRepository for SqliteBoardRepository {
    async fn create(&self, user_id: UserId, text: &str) -> BoardResult<CommentId> {
        let result = sqlx::query("INSERT INTO comments (user_id, comment) VALUES (?, ?)")
            .bind(user_id.value())
            .bind(text)
            .execute(&self.pool)
            .await?;

        Ok(CommentId::from_raw(result.last_insert_rowid()))
    }

    async fn list_by_user(&self, user_id: UserId) -> BoardResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT
                id,
                user_id,
                comment
            FROM comments
            WHERE user_id = ?
            ORDER BY id
            "#,
        )
        .bind(user_id.value())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CommentRow::into_comment).collect())
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: i64,
    user_id: i64,
    comment: String,
}

impl CommentRow {
    fn into_comment(self) -> Comment {
        Comment {
            comment_id: CommentId::from_raw(self.id),
            user_id: UserId::from_raw(self.user_id),
            text: self.comment,
        }
    }
}

//! List Comments Use Case

use std::sync::Arc;

use auth::AuthSession;

use crate::domain::entities::Comment;
use crate::domain::repository::CommentRepository;
use crate::error::BoardResult;

pub struct ListCommentsUseCase<R>
where
    R: CommentRepository,
{
    repo: Arc<R>,
}

impl<R> ListCommentsUseCase<R>
where
    R: CommentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// The session user's own comments, in insertion order
    pub async fn execute(&self, session: &AuthSession) -> BoardResult<Vec<Comment>> {
        self.repo.list_by_user(session.user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::SubmitCommentUseCase;
    use crate::infra::sqlite::SqliteBoardRepository;
    use auth::domain::UserRole;
    use kernel::id::UserId;

    async fn setup() -> (Arc<SqliteBoardRepository>, AuthSession, AuthSession) {
        let pool = platform::database::connect_in_memory().await.unwrap();
        platform::database::create_schema(&pool).await.unwrap();

        let mut ids = Vec::new();
        for name in ["alice", "bob"] {
            let id: i64 = sqlx::query_scalar(
                "INSERT INTO users (username, password, role) VALUES (?, 'x', 'user') RETURNING id",
            )
            .bind(name)
            .fetch_one(&pool)
            .await
            .unwrap();
            ids.push(id);
        }

        let session = |id: i64| AuthSession {
            user_id: UserId::from_raw(id),
            user_role: UserRole::User,
            expires_at_ms: i64::MAX,
        };

        (
            Arc::new(SqliteBoardRepository::new(pool)),
            session(ids[0]),
            session(ids[1]),
        )
    }

    #[tokio::test]
    async fn test_users_only_see_their_own_comments() {
        let (repo, alice, bob) = setup().await;
        let submit = SubmitCommentUseCase::new(repo.clone());
        let list = ListCommentsUseCase::new(repo);

        submit.execute(&alice, "a1").await.unwrap();
        submit.execute(&bob, "b1").await.unwrap();
        submit.execute(&alice, "a2").await.unwrap();
        submit.execute(&bob, "b2").await.unwrap();

        let texts = |comments: Vec<Comment>| {
            comments.into_iter().map(|c| c.text).collect::<Vec<_>>()
        };
        assert_eq!(texts(list.execute(&alice).await.unwrap()), vec!["a1", "a2"]);
        assert_eq!(texts(list.execute(&bob).await.unwrap()), vec!["b1", "b2"]);
    }

    #[tokio::test]
    async fn test_injection_payload_stored_literally() {
        let (repo, alice, bob) = setup().await;
        let submit = SubmitCommentUseCase::new(repo.clone());
        let list = ListCommentsUseCase::new(repo);

        submit.execute(&bob, "keep me").await.unwrap();
        submit
            .execute(&alice, "'; DROP TABLE comments; --")
            .await
            .unwrap();

        let comments = list.execute(&alice).await.unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].text, "'; DROP TABLE comments; --");
        assert_eq!(comments[0].user_id, alice.user_id);
        assert_eq!(list.execute(&bob).await.unwrap()[0].text, "keep me");
    }

    #[tokio::test]
    async fn test_empty_list() {
        let (repo, alice, _) = setup().await;
        let list = ListCommentsUseCase::new(repo);
        assert!(list.execute(&alice).await.unwrap().is_empty());
    }
}

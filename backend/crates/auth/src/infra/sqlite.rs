//! SQLite Repository Implementations
//!
//! Every value reaches SQLite as a bound `?` parameter.

use kernel::id::UserId;
use platform::password::PasswordDigest;
use sqlx::SqlitePool;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_role::UserRole;
use crate::error::{AuthError, AuthResult};

/// SQLite-backed auth repository
#[derive(Clone)]
pub struct SqliteAuthRepository {
    pool: SqlitePool,
}

impl SqliteAuthRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for SqliteAuthRepository {
    async fn find_by_credentials(
        &self,
        username: &str,
        password_digest: &PasswordDigest,
    ) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id,
                username,
                role
            FROM users
            WHERE username = ? AND password = ?
            "#,
        )
        .bind(username)
        .bind(password_digest.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn exists_by_username(&self, username: &str) -> AuthResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = ?)",
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn create(&self, user: &NewUser) -> AuthResult<UserId> {
        let result = sqlx::query("INSERT INTO users (username, password, role) VALUES (?, ?, ?)")
            .bind(&user.username)
            .bind(user.password_digest.as_str())
            .bind(user.user_role.code())
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                    AuthError::UserNameTaken
                }
                _ => AuthError::Database(e),
            })?;

        Ok(UserId::from_raw(result.last_insert_rowid()))
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    role: String,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            user_id: UserId::from_raw(self.id),
            username: self.username,
            user_role: UserRole::from_code(&self.role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::ClearTextPassword;

    async fn repo() -> SqliteAuthRepository {
        let pool = platform::database::connect_in_memory().await.unwrap();
        platform::database::create_schema(&pool).await.unwrap();
        SqliteAuthRepository::new(pool)
    }

    fn new_user(name: &str, password: &str, role: UserRole) -> NewUser {
        NewUser {
            username: name.to_string(),
            password_digest: ClearTextPassword::new(password.to_string()).digest(None),
            user_role: role,
        }
    }

    #[tokio::test]
    async fn test_find_by_credentials() {
        let repo = repo().await;
        let id = repo.create(&new_user("alice", "pw123", UserRole::User)).await.unwrap();

        let digest = ClearTextPassword::new("pw123".to_string()).digest(None);
        let user = repo.find_by_credentials("alice", &digest).await.unwrap().unwrap();
        assert_eq!(user.user_id, id);
        assert_eq!(user.username, "alice");
        assert_eq!(user.user_role, UserRole::User);

        let wrong = ClearTextPassword::new("pw124".to_string()).digest(None);
        assert!(repo.find_by_credentials("alice", &wrong).await.unwrap().is_none());
        assert!(repo.find_by_credentials("bob", &digest).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_stored_password_is_digest() {
        let repo = repo().await;
        repo.create(&new_user("alice", "pw123", UserRole::Admin)).await.unwrap();

        let stored: String = sqlx::query_scalar("SELECT password FROM users WHERE username = ?")
            .bind("alice")
            .fetch_one(repo.pool())
            .await
            .unwrap();
        assert_eq!(stored.len(), 64);
        assert_ne!(stored, "pw123");
    }

    #[tokio::test]
    async fn test_duplicate_username() {
        let repo = repo().await;
        repo.create(&new_user("alice", "a", UserRole::User)).await.unwrap();

        let result = repo.create(&new_user("alice", "b", UserRole::Admin)).await;
        assert!(matches!(result, Err(AuthError::UserNameTaken)));
        assert!(repo.exists_by_username("alice").await.unwrap());
        assert!(!repo.exists_by_username("Alice").await.unwrap());
    }

    #[tokio::test]
    async fn test_injection_payload_is_bound() {
        let repo = repo().await;
        repo.create(&new_user("alice", "pw123", UserRole::User)).await.unwrap();

        let digest = ClearTextPassword::new("x".to_string()).digest(None);
        let user = repo
            .find_by_credentials("' OR 1=1 --", &digest)
            .await
            .unwrap();
        assert!(user.is_none());
    }
}

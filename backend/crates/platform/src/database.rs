//! SQLite Store
//!
//! Pool construction and the one-shot schema for the `users` and
//! `comments` tables. Every repository call acquires a pooled connection
//! for a single statement; sqlx returns it to the pool on every exit path.

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Idempotent schema, applied in order
pub const SQLITE_SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL,
        role TEXT NOT NULL DEFAULT 'user' CHECK (role IN ('user', 'admin'))
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS comments (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users (id),
        comment TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_comments_user_id ON comments (user_id)",
];

/// Open a pool for `url` (e.g. `sqlite://example.db?mode=rwc`)
pub async fn connect(url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Private in-memory database
///
/// Pinned to a single connection that is never recycled: each SQLite
/// memory connection is its own database.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect_with(options)
        .await
}

/// Create the tables if they do not exist yet
pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SQLITE_SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::debug!("SQLite schema ensured");
    Ok(())
}

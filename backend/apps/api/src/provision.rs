//! First-run Provisioning
//!
//! Creates the tables if absent and inserts configured users that do not
//! exist yet. Safe to run on every start.

use std::sync::Arc;

use anyhow::Context;
use auth::application::{SeedUser, SeedUsersUseCase};
use auth::{AuthConfig, SqliteAuthRepository};
use sqlx::SqlitePool;

pub async fn provision(
    pool: &SqlitePool,
    auth_config: Arc<AuthConfig>,
    seeds: Vec<SeedUser>,
) -> anyhow::Result<usize> {
    platform::database::create_schema(pool)
        .await
        .context("failed to create database schema")?;

    let repo = Arc::new(SqliteAuthRepository::new(pool.clone()));
    let created = SeedUsersUseCase::new(repo, auth_config)
        .execute(seeds)
        .await
        .context("failed to seed users")?;

    tracing::info!(users_created = created, "Database provisioned");
    Ok(created)
}

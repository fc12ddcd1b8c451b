//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-time errors are the
//! crates' own error enums rendered as problem bodies.

use std::sync::Arc;

use anyhow::Context;
use api::{AppConfig, build_router, provision};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,board=info,platform=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = AppConfig::from_env().context("invalid configuration")?;
    tracing::debug!(?config, "Configuration loaded");

    if config.session_secret_generated {
        tracing::warn!("SESSION_SECRET not set; using a random key, sessions end on restart");
    }

    // Database connection
    let pool = platform::database::connect(&config.database_url, config.database_max_connections)
        .await
        .with_context(|| format!("failed to open {}", config.database_url))?;

    tracing::info!("Connected to database");

    let auth_config = config.auth_config();

    if config.provision {
        let seeds = std::mem::take(&mut config.seed_users);
        provision(&pool, Arc::new(auth_config.clone()), seeds).await?;
    }

    // Build router
    let app = build_router(pool, auth_config)?;

    // Start server
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

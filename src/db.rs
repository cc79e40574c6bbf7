use std::time::Duration;

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::DbConfig;

/// Opens the shared connection pool. Authentication happens eagerly, so a bad
/// password or unreachable host fails startup instead of the first request.
pub async fn connect(config: &DbConfig) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .min_connections(0)
        .acquire_timeout(Duration::from_secs(30))
        .idle_timeout(Duration::from_secs(10))
        .connect(&config.url())
        .await
        .context("connect to database")?;

    tracing::info!(host = %config.host, database = %config.name, "database connection established");
    Ok(pool)
}

use crate::{
    config::DatabaseConfig,
    error::{AppError, Result},
};
use sqlx::{PgPool, postgres::PgPoolOptions};

pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let url = config
        .url
        .as_deref()
        .ok_or_else(|| AppError::ConfigError("DB_URL not set".to_string()))?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(url)
        .await?;

    sqlx::migrate!().run(&pool).await?;

    tracing::info!(
        "Database connection established with {} max connections",
        config.max_connections
    );

    Ok(pool)
}

pub async fn check_health(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1").fetch_one(pool).await?;
    Ok(())
}

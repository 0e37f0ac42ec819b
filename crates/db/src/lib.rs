//! PostgreSQL persistence for todorate.
//!
//! - [`base`]: bookkeeping columns and the [`BaseModel`] capability
//! - [`models`]: row structs and DTOs
//! - [`repositories`]: zero-sized repos taking `&PgPool`

use sqlx::postgres::PgPoolOptions;

pub mod base;
pub mod config;
pub mod models;
pub mod repositories;

pub use base::{BaseColumns, BaseModel, LookupError};
pub use config::{ConfigError, DbConfig};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from configuration.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    tracing::info!(
        max_connections = config.max_connections,
        "Database connection pool created"
    );
    Ok(pool)
}

/// Run a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}

/**
 * Server Configuration
 *
 * Loads the database configuration from the environment and builds the
 * connection pool. Unlike optional services, the database is required:
 * startup fails if the pool cannot be created.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::db::schema;
use crate::error::AppError;

/// Default database location for local development.
const DEFAULT_DATABASE_URL: &str = "sqlite:warbler.db";

/// Create the database pool and ensure the schema exists.
///
/// Reads `DATABASE_URL` (defaulting to a local SQLite file). Foreign
/// keys are enabled on every connection; the cascade rules in the
/// schema depend on it.
pub async fn load_database() -> Result<SqlitePool, AppError> {
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    tracing::info!("Connecting to database at {}", database_url);

    let options = SqliteConnectOptions::from_str(&database_url)
        .map_err(AppError::Database)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .map_err(AppError::Database)?;

    schema::create_all(&pool).await?;
    tracing::info!("Database schema ready");

    Ok(pool)
}

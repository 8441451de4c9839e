use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::time::Duration;
use tracing::info;
use utopia_core::repository::UniqueViolation;

use crate::app_config::DatabaseConfig;

#[derive(Clone)]
pub struct DbClient {
    pub pool: Pool<Postgres>,
}

impl DbClient {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&config.url)
            .await?;

        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        info!("Running database migrations...");
        sqlx::migrate!("../migrations")
            .run(&self.pool)
            .await?;
        info!("Migrations completed successfully.");
        Ok(())
    }
}

/// Boxes a write failure, turning unique-constraint violations into
/// [`UniqueViolation`] so the services can report a conflict.
pub(crate) fn write_error(err: sqlx::Error, field: &str) -> Box<dyn std::error::Error + Send + Sync> {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return Box::new(UniqueViolation {
                field: field.to_string(),
            });
        }
    }
    Box::new(err)
}

//! Database module - MySQL implementations using SQLx

pub mod mysql;

use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use tracing::info;

use sr_shared::config::DatabaseConfig;

use crate::InfrastructureError;

pub use mysql::{MySqlPickupRepository, MySqlUserRepository, MySqlWalletRepository};

/// Build a MySQL connection pool from configuration.
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, InfrastructureError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .connect(&config.url)
        .await?;

    info!(
        max_connections = config.max_connections,
        "Connected to MySQL"
    );
    Ok(pool)
}

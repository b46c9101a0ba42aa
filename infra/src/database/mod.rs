//! Database module - MySQL implementations using SQLx

pub mod mysql;

use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

use ic_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// Create a MySQL connection pool.
///
/// Acquire and idle timeouts come from configuration so every store call
/// is bounded instead of blocking a request indefinitely.
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, InfrastructureError> {
    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .connect(&config.url)
        .await
        .map_err(|e| InfrastructureError::Database(format!("Failed to connect to MySQL: {}", e)))
}

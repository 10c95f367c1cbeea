//! Database connection pool management.
//!
//! Every DAO call checks a connection out of this pool for the duration of
//! one statement; sqlx returns it when the query future completes or is
//! dropped, so release happens on every exit path.

use async_trait::async_trait;
use easyshop_config::DatabaseConfig;
use easyshop_core::{StoreError, StoreResult};
use shaku::{Component, Interface};
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use sqlx::ConnectOptions;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};

/// Connection provider shared by all DAOs.
#[async_trait]
pub trait DatabasePoolInterface: Interface + Send + Sync {
    /// Returns a reference to the underlying MySQL pool.
    fn inner(&self) -> &MySqlPool;

    /// Checks if the database connection is healthy.
    async fn health_check(&self) -> StoreResult<()>;

    /// Closes the database pool.
    async fn close(&self);
}

/// Database pool wrapper.
#[derive(Component)]
#[shaku(interface = DatabasePoolInterface)]
pub struct DatabasePool {
    pool: MySqlPool,
}

impl DatabasePool {
    /// Creates a new database pool from configuration.
    pub async fn new(config: &DatabaseConfig) -> StoreResult<Self> {
        info!("Connecting to MySQL database...");

        let mut options = MySqlConnectOptions::from_str(&config.url).map_err(StoreError::database)?;
        if !config.log_queries {
            options = options.disable_statement_logging();
        }

        let pool = MySqlPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .idle_timeout(Some(config.idle_timeout()))
            .connect_with(options)
            .await
            .map_err(|e| {
                warn!("Failed to connect to database: {}", e);
                StoreError::database(e)
            })?;

        info!("MySQL connection pool established");
        Ok(Self { pool })
    }

    /// Wraps a pre-existing pool.
    #[must_use]
    pub fn with_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DatabasePoolInterface for DatabasePool {
    fn inner(&self) -> &MySqlPool {
        &self.pool
    }

    async fn health_check(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        info!("Closing database connection pool...");
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("size", &self.pool.size())
            .field("num_idle", &self.pool.num_idle())
            .finish()
    }
}

/// Creates a shared database pool.
pub async fn create_pool(config: &DatabaseConfig) -> StoreResult<Arc<DatabasePool>> {
    let pool = DatabasePool::new(config).await?;
    Ok(Arc::new(pool))
}

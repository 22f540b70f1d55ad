// Database connection pooling management

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::time::Duration;

use crate::config::ApiConfig;
use crate::db::error::DbError;

/// Database connection pool for managing Sea-ORM connections
#[derive(Clone)]
pub struct DbPool {
    pool: DatabaseConnection,
}

impl DbPool {
    /// Creates a new database connection pool from API configuration
    pub async fn new(config: &ApiConfig) -> Result<Self, DbError> {
        let acquire_timeout_secs: u64 = 8;
        let idle_timeout_secs: u64 = 300;
        let connect_timeout_secs: u64 = 10;
        let debug_mode = false;

        let conn_opts = ConnectOptions::new(config.database_url.clone())
            .max_connections(config.db_pool_max)
            .min_connections(config.db_pool_min.min(config.db_pool_max))
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .idle_timeout(Duration::from_secs(idle_timeout_secs))
            .acquire_timeout(Duration::from_secs(acquire_timeout_secs))
            .sqlx_logging(debug_mode)
            .to_owned();

        Database::connect(conn_opts)
            .await
            .map(DbPool::from_connection)
            .map_err(|e| DbError::ConnectionError(e.to_string()))
    }

    /// Wraps an already established connection
    pub fn from_connection(pool: DatabaseConnection) -> Self {
        DbPool { pool }
    }

    /// Returns a reference to the underlying database connection
    pub fn get_connection(&self) -> &DatabaseConnection {
        &self.pool
    }

    /// Runs a no-op query to confirm the database accepts statements
    pub async fn ping(&self) -> Result<(), DbError> {
        let backend = match &self.pool {
            DatabaseConnection::Disconnected => {
                return Err(DbError::ConnectionError("connection is closed".to_string()))
            }
            conn => conn.get_database_backend(),
        };
        self.pool
            .execute(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    /// Applies pending schema migrations; already applied ones are skipped
    pub async fn migrate(&self) -> Result<(), DbError> {
        Migrator::up(&self.pool, None)
            .await
            .map_err(|e| DbError::MigrationError(e.to_string()))
    }
}

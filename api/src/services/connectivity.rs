// Connectivity checks against the key-value and relational stores

use crate::cache::{CacheError, RedisStore};
use crate::db::{DbError, DbPool};

/// Key written by the Redis check
pub const REDIS_TEST_KEY: &str = "test";

/// Value written by the Redis check and expected back
pub const REDIS_TEST_VALUE: &str = "Rosalie is working!";

/// Message returned when the database answers
pub const DATABASE_OK_MESSAGE: &str = "Database connection working";

/// Writes the fixed test key and returns the value read back
pub async fn check_redis(store: &RedisStore) -> Result<String, CacheError> {
    match store.write_and_read(REDIS_TEST_KEY, REDIS_TEST_VALUE).await {
        Ok(value) => {
            tracing::debug!("Redis round trip returned {:?}", value);
            Ok(value)
        }
        Err(err) => {
            tracing::warn!("Redis check failed: {}", err);
            Err(err)
        }
    }
}

/// Runs `SELECT 1` against the pool
pub async fn check_database(db: &DbPool) -> Result<&'static str, DbError> {
    match db.ping().await {
        Ok(()) => Ok(DATABASE_OK_MESSAGE),
        Err(err) => {
            tracing::warn!("Database check failed: {}", err);
            Err(err)
        }
    }
}

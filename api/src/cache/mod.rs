// Redis key-value store client

use redis::AsyncCommands;
use std::time::Duration;
use thiserror::Error;

use crate::config::ApiConfig;

/// Error types for key-value store operations
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Redis connection error: {0}")]
    ConnectionError(String),

    #[error("Redis command error: {0}")]
    CommandError(String),

    #[error("Redis did not respond within {0:?}")]
    Timeout(Duration),
}

/// Process-wide handle to the Redis server. Cloning shares the client.
#[derive(Clone)]
pub struct RedisStore {
    client: redis::Client,
    timeout: Duration,
}

impl RedisStore {
    /// Builds the client; no connection is made until the first command
    pub fn new(config: &ApiConfig) -> Result<Self, CacheError> {
        let client = redis::Client::open(config.redis_url.as_str())
            .map_err(|e| CacheError::ConnectionError(e.to_string()))?;

        Ok(Self {
            client,
            timeout: config.redis_timeout,
        })
    }

    /// Writes `value` under `key` and reads it back
    pub async fn write_and_read(&self, key: &str, value: &str) -> Result<String, CacheError> {
        tokio::time::timeout(self.timeout, self.round_trip(key, value))
            .await
            .map_err(|_| CacheError::Timeout(self.timeout))?
    }

    async fn round_trip(&self, key: &str, value: &str) -> Result<String, CacheError> {
        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| CacheError::ConnectionError(e.to_string()))?;

        conn.set::<_, _, ()>(key, value)
            .await
            .map_err(|e| CacheError::CommandError(e.to_string()))?;

        let stored: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| CacheError::CommandError(e.to_string()))?;

        stored.ok_or_else(|| CacheError::CommandError(format!("key '{}' missing after write", key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(url: &str) -> ApiConfig {
        let mut config = ApiConfig::from_lookup(|_| None);
        config.redis_url = url.to_string();
        config.redis_timeout = Duration::from_secs(2);
        config
    }

    #[test]
    fn test_rejects_malformed_url() {
        assert!(matches!(
            RedisStore::new(&config_with("definitely not a url")),
            Err(CacheError::ConnectionError(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_server_reports_error() {
        // Nothing listens on port 1
        let store = RedisStore::new(&config_with("redis://127.0.0.1:1/0")).unwrap();
        let err = store.write_and_read("test", "value").await.unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}

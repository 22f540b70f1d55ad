// API response models
use serde::Serialize;

/// Outcome marker carried by the connectivity check payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Success,
    Error,
}

/// Response structure for GET /
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// Response structure for GET /test-redis
#[derive(Debug, Serialize)]
pub struct RedisStatusResponse {
    pub redis_status: CheckStatus,
    pub message: String,
}

/// Response structure for GET /test-database
#[derive(Debug, Serialize)]
pub struct DatabaseStatusResponse {
    pub database_status: CheckStatus,
    pub message: String,
}

/// Row count of a single table
#[derive(Debug, Serialize)]
pub struct TableCount {
    pub table: String,
    pub rows: u64,
}

/// Response structure for GET /diagnose
#[derive(Debug, Serialize)]
pub struct DiagnosticResponse {
    pub backend: &'static str,
    pub tables: Vec<TableCount>,
}

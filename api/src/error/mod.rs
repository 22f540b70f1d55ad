use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::cache::CacheError;
use crate::db::DbError;
use crate::models::{CheckStatus, DatabaseStatusResponse, RedisStatusResponse};

/// Failures surfaced by the API. Each maps to a non-2xx status while keeping
/// the `<store>_status` payload shape of the matching check endpoint.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Redis(String),
    #[error("{0}")]
    Database(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::SERVICE_UNAVAILABLE;

        match self {
            ApiError::Redis(message) => (
                status,
                Json(RedisStatusResponse {
                    redis_status: CheckStatus::Error,
                    message,
                }),
            )
                .into_response(),
            ApiError::Database(message) => (
                status,
                Json(DatabaseStatusResponse {
                    database_status: CheckStatus::Error,
                    message,
                }),
            )
                .into_response(),
        }
    }
}

// CacheError to ApiError conversion implementation
impl From<CacheError> for ApiError {
    fn from(err: CacheError) -> Self {
        ApiError::Redis(err.to_string())
    }
}

// DbError to ApiError conversion implementation
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        ApiError::Database(err.to_string())
    }
}

// Connectivity check endpoint handlers

use axum::{extract::State, Json};

use crate::error::ApiResult;
use crate::handlers::SharedState;
use crate::models::{CheckStatus, DatabaseStatusResponse, RedisStatusResponse};
use crate::services::connectivity;

/// Handler for GET /test-redis - Writes and reads back a fixed key
pub async fn test_redis(
    State(state): State<SharedState>,
) -> ApiResult<Json<RedisStatusResponse>> {
    let message = connectivity::check_redis(&state.cache).await?;

    Ok(Json(RedisStatusResponse {
        redis_status: CheckStatus::Success,
        message,
    }))
}

/// Handler for GET /test-database - Runs a trivial query
pub async fn test_database(
    State(state): State<SharedState>,
) -> ApiResult<Json<DatabaseStatusResponse>> {
    let message = connectivity::check_database(&state.db).await?;

    Ok(Json(DatabaseStatusResponse {
        database_status: CheckStatus::Success,
        message: message.to_string(),
    }))
}

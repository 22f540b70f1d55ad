// Health check endpoint handler implementation

use axum::Json;

use crate::models::RootResponse;
use crate::services::health::HealthChecker;

/// Handler for GET / - Returns the static running message
pub async fn read_root() -> Json<RootResponse> {
    let health_checker = HealthChecker::new();
    Json(RootResponse {
        message: health_checker.status_message(),
    })
}

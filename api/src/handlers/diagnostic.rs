// Database diagnostic endpoint handler implementation

use axum::{extract::State, Json};

use crate::error::ApiResult;
use crate::handlers::SharedState;
use crate::models::DiagnosticResponse;
use crate::services::diagnostic::DiagnosticService;

/// Handler for GET /diagnose - Returns per-table row counts
pub async fn diagnose_database(
    State(state): State<SharedState>,
) -> ApiResult<Json<DiagnosticResponse>> {
    let diagnostic_service = DiagnosticService::new(state.db.get_connection());
    Ok(Json(diagnostic_service.diagnose().await?))
}

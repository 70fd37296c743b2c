//! Handlers for the `/reports` resource.

use axum::extract::State;
use axum::Json;
use speedai_db::models::report::MonthlyReport;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /reports
///
/// Generated monthly reports, most recent period first (bare array).
pub async fn list_reports(State(state): State<AppState>) -> AppResult<Json<Vec<MonthlyReport>>> {
    let reports = state.store.list_reports().await?;
    Ok(Json(reports))
}

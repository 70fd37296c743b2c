//! Handlers for the `/calls` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use speedai_core::pagination::{PageQuery, CALLS_PAGE_SIZE};
use speedai_core::timefilter::TimeFilter;
use speedai_core::types::DbId;
use speedai_db::models::call::{CallRecord, CallStats};
use speedai_db::store::CallQuery;

use crate::error::AppResult;
use crate::query::{non_empty, CallListParams, StatsParams};
use crate::state::AppState;

/// GET /calls
///
/// List the call log, newest first. Envelope:
/// `{ "calls": [...], "total": n, "totalPages": m }`.
pub async fn list_calls(
    State(state): State<AppState>,
    Query(params): Query<CallListParams>,
) -> AppResult<Json<serde_json::Value>> {
    let page = PageQuery::from_params(
        params.page.as_deref(),
        params.limit.as_deref(),
        CALLS_PAGE_SIZE,
    );
    let query = CallQuery {
        status: non_empty(params.status),
        search: non_empty(params.search),
        page,
    };

    let result = state.store.list_calls(&query).await?;

    Ok(Json(serde_json::json!({
        "calls": result.items,
        "total": result.total,
        "totalPages": page.total_pages(result.total),
    })))
}

/// GET /calls/stats
///
/// Aggregate call statistics, counts scaled by `?timeFilter=`.
pub async fn call_stats(
    State(state): State<AppState>,
    Query(params): Query<StatsParams>,
) -> AppResult<Json<CallStats>> {
    let window = TimeFilter::from_param(params.time_filter.as_deref());
    let stats = state.store.call_stats(window).await?;
    Ok(Json(stats))
}

/// GET /calls/{id}
///
/// Single call record, or 404 `{ "message": "Appel non trouvé" }`.
pub async fn get_call(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CallRecord>> {
    let call = state.store.get_call(id).await?;
    Ok(Json(call))
}

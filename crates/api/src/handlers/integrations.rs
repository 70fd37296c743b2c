//! Handlers for the `/integrations` resource.

use axum::extract::{Query, State};
use axum::Json;
use speedai_db::models::integration::{IntegrationOrder, IntegrationStats};
use speedai_db::store::OrderQuery;

use crate::error::AppResult;
use crate::query::{non_empty, OrderListParams};
use crate::state::AppState;

/// GET /integrations/orders
///
/// Relayed third-party orders, newest first, optionally filtered by
/// `?source=` and `?status=` (bare array).
pub async fn list_orders(
    State(state): State<AppState>,
    Query(params): Query<OrderListParams>,
) -> AppResult<Json<Vec<IntegrationOrder>>> {
    let query = OrderQuery {
        source: non_empty(params.source),
        status: non_empty(params.status),
    };
    let orders = state.store.list_orders(&query).await?;
    Ok(Json(orders))
}

/// GET /integrations/stats
pub async fn integration_stats(
    State(state): State<AppState>,
) -> AppResult<Json<IntegrationStats>> {
    let stats = state.store.integration_stats().await?;
    Ok(Json(stats))
}

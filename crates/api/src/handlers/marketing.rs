//! Handlers for the `/marketing` resource.

use axum::extract::{Query, State};
use axum::Json;
use speedai_core::timefilter::Period;
use speedai_db::models::marketing::{CampaignRecord, MarketingSnapshot};

use crate::error::AppResult;
use crate::query::PeriodParams;
use crate::state::AppState;

/// GET /marketing/stats
///
/// Aggregate counters for the requested `?period=` (bare snapshot object).
pub async fn marketing_stats(
    State(state): State<AppState>,
    Query(params): Query<PeriodParams>,
) -> AppResult<Json<MarketingSnapshot>> {
    let period = Period::from_param(params.period.as_deref());
    let snapshot = state.store.marketing_stats(period).await?;
    Ok(Json(snapshot))
}

/// GET /marketing/campaigns
///
/// All campaigns, newest first (bare array).
pub async fn list_campaigns(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CampaignRecord>>> {
    let campaigns = state.store.list_campaigns().await?;
    Ok(Json(campaigns))
}

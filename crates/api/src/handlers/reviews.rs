//! Handlers for the `/reviews` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use speedai_core::pagination::{PageQuery, DEFAULT_PAGE_SIZE};
use speedai_core::types::DbId;
use speedai_db::models::review::{ReviewRecord, ReviewStats};
use speedai_db::store::ReviewQuery;

use crate::error::AppResult;
use crate::query::{non_empty, parse_num, ReviewListParams};
use crate::state::AppState;

/// GET /reviews
///
/// List reviews, newest first. `?ratingMin=` is an inclusive threshold;
/// `?search=` matches author and content case-insensitively. Envelope:
/// `{ "reviews": [...], "total": n }`.
pub async fn list_reviews(
    State(state): State<AppState>,
    Query(params): Query<ReviewListParams>,
) -> AppResult<Json<serde_json::Value>> {
    let query = ReviewQuery {
        platform: non_empty(params.platform),
        rating_min: parse_num(params.rating_min.as_deref()),
        search: non_empty(params.search),
        page: PageQuery::from_params(
            params.page.as_deref(),
            params.limit.as_deref(),
            DEFAULT_PAGE_SIZE,
        ),
    };

    let result = state.store.list_reviews(&query).await?;

    Ok(Json(serde_json::json!({
        "reviews": result.items,
        "total": result.total,
    })))
}

/// GET /reviews/stats
pub async fn review_stats(State(state): State<AppState>) -> AppResult<Json<ReviewStats>> {
    let stats = state.store.review_stats().await?;
    Ok(Json(stats))
}

/// GET /reviews/{id}
///
/// Single review, or 404 `{ "message": "Avis non trouvé" }`.
pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ReviewRecord>> {
    let review = state.store.get_review(id).await?;
    Ok(Json(review))
}

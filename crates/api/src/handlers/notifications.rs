//! Handlers for the `/notifications` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use speedai_core::types::DbId;

use crate::error::AppResult;
use crate::query::{parse_flag, NotificationListParams};
use crate::state::AppState;

/// GET /notifications
///
/// The notification feed, newest first. Envelope:
/// `{ "notifications": [...], "unreadCount": n }`.
pub async fn list_notifications(
    State(state): State<AppState>,
    Query(params): Query<NotificationListParams>,
) -> AppResult<Json<serde_json::Value>> {
    let unread_only = parse_flag(params.unread_only.as_deref());

    let notifications = state.store.list_notifications(unread_only).await?;
    let unread_count = state.store.unread_count().await?;

    Ok(Json(serde_json::json!({
        "notifications": notifications,
        "unreadCount": unread_count,
    })))
}

/// POST /notifications/{id}/read
///
/// Mark a single notification as read. 204 on success, 404 if unknown.
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    state.store.mark_notification_read(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /notifications/read-all
///
/// Mark every unread notification as read, returning how many changed.
pub async fn mark_all_read(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let count = state.store.mark_all_notifications_read().await?;
    Ok(Json(serde_json::json!({ "markedRead": count })))
}

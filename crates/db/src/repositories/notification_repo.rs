//! Repository for the `notifications` table.

use sqlx::PgPool;
use speedai_core::types::DbId;

use crate::models::notification::NotificationRecord;

/// Column list for `notifications` queries.
const COLUMNS: &str = "id, kind, title, message, is_read, created_at";

/// Operations over in-app notifications.
pub struct NotificationRepo;

impl NotificationRepo {
    /// List notifications, newest first. When `unread_only` is set, only
    /// rows with `is_read = false` are returned.
    pub async fn list(
        pool: &PgPool,
        business_id: DbId,
        unread_only: bool,
    ) -> Result<Vec<NotificationRecord>, sqlx::Error> {
        let filter = if unread_only { "AND is_read = false" } else { "" };
        let query = format!(
            "SELECT {COLUMNS} FROM notifications \
             WHERE business_id = $1 {filter} \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, NotificationRecord>(&query)
            .bind(business_id)
            .fetch_all(pool)
            .await
    }

    /// Count unread notifications.
    pub async fn unread_count(pool: &PgPool, business_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications WHERE business_id = $1 AND is_read = false",
        )
        .bind(business_id)
        .fetch_one(pool)
        .await
    }

    /// Mark a single notification as read.
    ///
    /// Returns `true` if the notification was found for the business and
    /// updated, `false` otherwise.
    pub async fn mark_read(
        pool: &PgPool,
        business_id: DbId,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = true \
             WHERE id = $1 AND business_id = $2 AND is_read = false",
        )
        .bind(id)
        .bind(business_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Mark all unread notifications as read, returning how many changed.
    pub async fn mark_all_read(pool: &PgPool, business_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = true \
             WHERE business_id = $1 AND is_read = false",
        )
        .bind(business_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}

//! Repository for the `calls` table.

use sqlx::PgPool;
use speedai_core::pagination::PageQuery;
use speedai_core::types::DbId;

use crate::models::call::{CallRecord, CallStats};

/// Column list for `calls` queries.
const COLUMNS: &str = "id, phone_number, status, duration_seconds, converted, summary, created_at";

/// Read operations over the call log.
pub struct CallRepo;

impl CallRepo {
    /// List one page of calls, newest first, with optional status and
    /// case-insensitive search filters. Returns the page and the filtered
    /// total.
    pub async fn list(
        pool: &PgPool,
        business_id: DbId,
        status: Option<&str>,
        search: Option<&str>,
        page: PageQuery,
    ) -> Result<(Vec<CallRecord>, i64), sqlx::Error> {
        let search_pattern = search.map(|s| format!("%{s}%"));

        let rows = sqlx::query_as::<_, CallRecord>(&format!(
            "SELECT {COLUMNS} FROM calls \
             WHERE business_id = $1 \
               AND ($2::text IS NULL OR status = $2) \
               AND ($3::text IS NULL OR phone_number ILIKE $3 OR summary ILIKE $3) \
             ORDER BY created_at DESC, id DESC \
             LIMIT $4 OFFSET $5"
        ))
        .bind(business_id)
        .bind(status)
        .bind(search_pattern.as_deref())
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM calls \
             WHERE business_id = $1 \
               AND ($2::text IS NULL OR status = $2) \
               AND ($3::text IS NULL OR phone_number ILIKE $3 OR summary ILIKE $3)",
        )
        .bind(business_id)
        .bind(status)
        .bind(search_pattern.as_deref())
        .fetch_one(pool)
        .await?;

        Ok((rows, total))
    }

    /// Fetch a single call, if it belongs to the business.
    pub async fn get(
        pool: &PgPool,
        business_id: DbId,
        id: DbId,
    ) -> Result<Option<CallRecord>, sqlx::Error> {
        sqlx::query_as::<_, CallRecord>(&format!(
            "SELECT {COLUMNS} FROM calls WHERE business_id = $1 AND id = $2"
        ))
        .bind(business_id)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Weekly aggregate statistics. Window scaling is applied by the
    /// caller; the query always aggregates the trailing seven days.
    pub async fn stats(pool: &PgPool, business_id: DbId) -> Result<CallStats, sqlx::Error> {
        let row: (i64, i64, i64, f64, f64) = sqlx::query_as(
            "SELECT COUNT(*), \
                    COUNT(*) FILTER (WHERE status = 'answered'), \
                    COUNT(*) FILTER (WHERE status = 'missed'), \
                    COALESCE( \
                        COUNT(*) FILTER (WHERE converted)::float8 \
                            / NULLIF(COUNT(*) FILTER (WHERE status = 'answered'), 0), \
                        0), \
                    COALESCE(AVG(duration_seconds)::float8, 0) \
             FROM calls \
             WHERE business_id = $1 AND created_at >= NOW() - INTERVAL '7 days'",
        )
        .bind(business_id)
        .fetch_one(pool)
        .await?;

        Ok(CallStats {
            total_calls: row.0,
            answered_calls: row.1,
            missed_calls: row.2,
            conversion_rate: row.3,
            avg_duration_seconds: row.4,
        })
    }
}

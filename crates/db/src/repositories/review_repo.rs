//! Repository for the `reviews` table.

use sqlx::PgPool;
use speedai_core::pagination::PageQuery;
use speedai_core::types::DbId;

use crate::models::review::{ReviewRecord, ReviewStats};

/// Column list for `reviews` queries.
const COLUMNS: &str = "id, platform, rating, author, content, created_at";

/// Read operations over customer reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// List one page of reviews, newest first. `rating_min` is an
    /// inclusive lower bound; `search` matches author and content
    /// case-insensitively.
    pub async fn list(
        pool: &PgPool,
        business_id: DbId,
        platform: Option<&str>,
        rating_min: Option<i32>,
        search: Option<&str>,
        page: PageQuery,
    ) -> Result<(Vec<ReviewRecord>, i64), sqlx::Error> {
        let search_pattern = search.map(|s| format!("%{s}%"));

        let rows = sqlx::query_as::<_, ReviewRecord>(&format!(
            "SELECT {COLUMNS} FROM reviews \
             WHERE business_id = $1 \
               AND ($2::text IS NULL OR platform = $2) \
               AND ($3::int IS NULL OR rating >= $3) \
               AND ($4::text IS NULL OR author ILIKE $4 OR content ILIKE $4) \
             ORDER BY created_at DESC, id DESC \
             LIMIT $5 OFFSET $6"
        ))
        .bind(business_id)
        .bind(platform)
        .bind(rating_min)
        .bind(search_pattern.as_deref())
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM reviews \
             WHERE business_id = $1 \
               AND ($2::text IS NULL OR platform = $2) \
               AND ($3::int IS NULL OR rating >= $3) \
               AND ($4::text IS NULL OR author ILIKE $4 OR content ILIKE $4)",
        )
        .bind(business_id)
        .bind(platform)
        .bind(rating_min)
        .bind(search_pattern.as_deref())
        .fetch_one(pool)
        .await?;

        Ok((rows, total))
    }

    /// Fetch a single review, if it belongs to the business.
    pub async fn get(
        pool: &PgPool,
        business_id: DbId,
        id: DbId,
    ) -> Result<Option<ReviewRecord>, sqlx::Error> {
        sqlx::query_as::<_, ReviewRecord>(&format!(
            "SELECT {COLUMNS} FROM reviews WHERE business_id = $1 AND id = $2"
        ))
        .bind(business_id)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Aggregate statistics over all reviews for the business.
    pub async fn stats(pool: &PgPool, business_id: DbId) -> Result<ReviewStats, sqlx::Error> {
        let row: (i64, f64, i64, i64, i64) = sqlx::query_as(
            "SELECT COUNT(*), \
                    COALESCE(AVG(rating)::float8, 0), \
                    COUNT(*) FILTER (WHERE platform = 'google'), \
                    COUNT(*) FILTER (WHERE platform = 'tripadvisor'), \
                    COUNT(*) FILTER (WHERE platform = 'facebook') \
             FROM reviews WHERE business_id = $1",
        )
        .bind(business_id)
        .fetch_one(pool)
        .await?;

        Ok(ReviewStats {
            total_reviews: row.0,
            average_rating: row.1,
            google_count: row.2,
            tripadvisor_count: row.3,
            facebook_count: row.4,
        })
    }
}

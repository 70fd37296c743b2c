//! Repository for the `recommendations` table.

use sqlx::PgPool;
use speedai_core::types::DbId;

use crate::models::recommendation::Recommendation;

/// Read operations over dashboard recommendations.
pub struct RecommendationRepo;

impl RecommendationRepo {
    /// List recommendations, highest priority first.
    pub async fn list(
        pool: &PgPool,
        business_id: DbId,
    ) -> Result<Vec<Recommendation>, sqlx::Error> {
        sqlx::query_as::<_, Recommendation>(
            "SELECT id, title, description, category, priority \
             FROM recommendations WHERE business_id = $1 ORDER BY priority ASC, id ASC",
        )
        .bind(business_id)
        .fetch_all(pool)
        .await
    }
}

//! Repository for the `integration_orders` table.

use sqlx::PgPool;
use speedai_core::types::DbId;

use crate::models::integration::{IntegrationOrder, IntegrationStats};

/// Column list for `integration_orders` queries.
const COLUMNS: &str = "id, source, external_id, amount_cents, status, channel, created_at";

/// Read operations over third-party orders.
pub struct OrderRepo;

impl OrderRepo {
    /// List orders, newest first, optionally filtered by source platform
    /// and status.
    pub async fn list(
        pool: &PgPool,
        business_id: DbId,
        source: Option<&str>,
        status: Option<&str>,
    ) -> Result<Vec<IntegrationOrder>, sqlx::Error> {
        sqlx::query_as::<_, IntegrationOrder>(&format!(
            "SELECT {COLUMNS} FROM integration_orders \
             WHERE business_id = $1 \
               AND ($2::text IS NULL OR source = $2) \
               AND ($3::text IS NULL OR status = $3) \
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(business_id)
        .bind(source)
        .bind(status)
        .fetch_all(pool)
        .await
    }

    /// Aggregate order statistics for the business.
    pub async fn stats(pool: &PgPool, business_id: DbId) -> Result<IntegrationStats, sqlx::Error> {
        let row: (i64, i64, i64, i64, i64) = sqlx::query_as(
            "SELECT COUNT(*), \
                    COALESCE(SUM(amount_cents), 0), \
                    COUNT(*) FILTER (WHERE source = 'ubereats'), \
                    COUNT(*) FILTER (WHERE source = 'deliveroo'), \
                    COUNT(*) FILTER (WHERE source = 'justeat') \
             FROM integration_orders WHERE business_id = $1",
        )
        .bind(business_id)
        .fetch_one(pool)
        .await?;

        Ok(IntegrationStats {
            total_orders: row.0,
            total_revenue_cents: row.1,
            ubereats_count: row.2,
            deliveroo_count: row.3,
            justeat_count: row.4,
        })
    }
}

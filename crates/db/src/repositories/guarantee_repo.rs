//! Repository for the `guarantee_sessions` and `no_show_charges` tables.

use sqlx::PgPool;
use speedai_core::types::DbId;

use crate::models::guarantee::{GuaranteeSession, GuaranteeStats, NoShowCharge};

/// Column list for `guarantee_sessions` queries.
const SESSION_COLUMNS: &str = "id, customer_name, phone_number, reservation_at, party_size, \
                               status, payment_status, amount_cents";

/// Read operations over the no-show guarantee data.
pub struct GuaranteeRepo;

impl GuaranteeRepo {
    /// List guarantee sessions, upcoming first, optionally filtered by
    /// status.
    pub async fn list_sessions(
        pool: &PgPool,
        business_id: DbId,
        status: Option<&str>,
    ) -> Result<Vec<GuaranteeSession>, sqlx::Error> {
        sqlx::query_as::<_, GuaranteeSession>(&format!(
            "SELECT {SESSION_COLUMNS} FROM guarantee_sessions \
             WHERE business_id = $1 AND ($2::text IS NULL OR status = $2) \
             ORDER BY reservation_at DESC"
        ))
        .bind(business_id)
        .bind(status)
        .fetch_all(pool)
        .await
    }

    /// List no-show charges, newest first.
    pub async fn list_charges(
        pool: &PgPool,
        business_id: DbId,
    ) -> Result<Vec<NoShowCharge>, sqlx::Error> {
        sqlx::query_as::<_, NoShowCharge>(
            "SELECT c.id, c.session_id, c.amount_cents, c.status, c.disputed, c.charged_at \
             FROM no_show_charges c \
             JOIN guarantee_sessions s ON s.id = c.session_id \
             WHERE s.business_id = $1 \
             ORDER BY c.charged_at DESC",
        )
        .bind(business_id)
        .fetch_all(pool)
        .await
    }

    /// Aggregate guarantee statistics for the business.
    pub async fn stats(pool: &PgPool, business_id: DbId) -> Result<GuaranteeStats, sqlx::Error> {
        let row: (i64, i64, i64, i64) = sqlx::query_as(
            "SELECT (SELECT COUNT(*) FROM guarantee_sessions WHERE business_id = $1), \
                    (SELECT COUNT(*) FROM guarantee_sessions \
                     WHERE business_id = $1 AND status = 'no_show'), \
                    (SELECT COALESCE(SUM(c.amount_cents), 0) FROM no_show_charges c \
                     JOIN guarantee_sessions s ON s.id = c.session_id \
                     WHERE s.business_id = $1 AND c.status = 'succeeded'), \
                    (SELECT COUNT(*) FROM no_show_charges c \
                     JOIN guarantee_sessions s ON s.id = c.session_id \
                     WHERE s.business_id = $1 AND c.disputed)",
        )
        .bind(business_id)
        .fetch_one(pool)
        .await?;

        Ok(GuaranteeStats {
            protected_reservations: row.0,
            no_shows: row.1,
            recovered_cents: row.2,
            dispute_count: row.3,
        })
    }
}

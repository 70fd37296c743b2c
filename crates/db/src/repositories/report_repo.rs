//! Repository for the `monthly_reports` table.

use sqlx::PgPool;
use speedai_core::types::DbId;

use crate::models::report::MonthlyReport;

/// Read operations over generated monthly reports.
pub struct ReportRepo;

impl ReportRepo {
    /// List reports, most recent period first.
    pub async fn list(pool: &PgPool, business_id: DbId) -> Result<Vec<MonthlyReport>, sqlx::Error> {
        sqlx::query_as::<_, MonthlyReport>(
            "SELECT id, period_label, status, storage_path, generated_at \
             FROM monthly_reports WHERE business_id = $1 ORDER BY id DESC",
        )
        .bind(business_id)
        .fetch_all(pool)
        .await
    }
}

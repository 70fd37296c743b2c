//! Monthly report models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use speedai_core::types::{DbId, Timestamp};

/// Generation lifecycle of a monthly report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "report_status", rename_all = "snake_case")]
pub enum ReportStatus {
    Pending,
    Generating,
    PdfGenerated,
    Sent,
    Failed,
}

/// A row from the `monthly_reports` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub id: DbId,
    /// Human label for the covered period, e.g. "Juillet 2026".
    pub period_label: String,
    pub status: ReportStatus,
    /// Object-storage path of the rendered PDF, once generated.
    pub storage_path: Option<String>,
    pub generated_at: Option<Timestamp>,
}

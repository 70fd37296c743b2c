//! Monthly report fixtures — one per recent month, covering every
//! lifecycle status.

use speedai_db::models::report::{MonthlyReport, ReportStatus};

use super::ts;

fn report(
    id: i64,
    period_label: &str,
    status: ReportStatus,
    storage_path: Option<&str>,
    generated_at: Option<speedai_core::types::Timestamp>,
) -> MonthlyReport {
    MonthlyReport {
        id,
        period_label: period_label.to_string(),
        status,
        storage_path: storage_path.map(str::to_string),
        generated_at,
    }
}

/// Generated reports, most recent period first.
pub fn reports() -> Vec<MonthlyReport> {
    vec![
        report(6, "Août 2026", ReportStatus::Pending, None, None),
        report(5, "Juillet 2026", ReportStatus::Generating, None, None),
        report(4, "Juin 2026", ReportStatus::Sent, Some("reports/2026-06.pdf"), Some(ts(2026, 7, 2, 6, 0))),
        report(3, "Mai 2026", ReportStatus::PdfGenerated, Some("reports/2026-05.pdf"), Some(ts(2026, 6, 2, 6, 0))),
        report(2, "Avril 2026", ReportStatus::Failed, None, None),
        report(1, "Mars 2026", ReportStatus::Sent, Some("reports/2026-03.pdf"), Some(ts(2026, 4, 2, 6, 0))),
    ]
}

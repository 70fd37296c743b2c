//! Call log models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use speedai_core::types::{DbId, Timestamp};

/// A row from the `calls` table: one handled phone call.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRecord {
    pub id: DbId,
    pub phone_number: String,
    /// `answered`, `missed` or `voicemail`.
    pub status: String,
    pub duration_seconds: i32,
    /// Whether the call converted into a reservation.
    pub converted: bool,
    /// Free-text summary produced by the voice assistant.
    pub summary: String,
    pub created_at: Timestamp,
}

/// Aggregate call statistics for a time window.
///
/// Counts are scaled by the window multiplier; rates and averages are not.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallStats {
    pub total_calls: i64,
    pub answered_calls: i64,
    pub missed_calls: i64,
    /// Fraction of answered calls that converted, 0.0..=1.0.
    pub conversion_rate: f64,
    pub avg_duration_seconds: f64,
}

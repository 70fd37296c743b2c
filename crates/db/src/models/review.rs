//! Customer review models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use speedai_core::types::{DbId, Timestamp};

/// A row from the `reviews` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    pub id: DbId,
    /// Source platform: `google`, `tripadvisor`, `facebook`, ...
    pub platform: String,
    /// Star rating, 1..=5.
    pub rating: i32,
    pub author: String,
    pub content: String,
    pub created_at: Timestamp,
}

/// Aggregate review statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    pub total_reviews: i64,
    pub average_rating: f64,
    pub google_count: i64,
    pub tripadvisor_count: i64,
    pub facebook_count: i64,
}

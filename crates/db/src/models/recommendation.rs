//! Growth recommendation models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use speedai_core::types::DbId;

/// A row from the `recommendations` table: a suggested action surfaced on
/// the dashboard home page.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: DbId,
    pub title: String,
    pub description: String,
    /// `reviews`, `marketing`, `guarantee`, ...
    pub category: String,
    /// 1 is highest.
    pub priority: i32,
}

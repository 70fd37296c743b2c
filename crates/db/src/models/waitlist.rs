//! Waitlist models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use speedai_core::types::{DbId, Timestamp};

/// A row from the `waitlist_entries` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntry {
    pub id: DbId,
    pub customer_name: String,
    pub phone_number: String,
    pub party_size: i32,
    /// `waiting`, `notified`, `seated`, `left`.
    pub status: String,
    pub joined_at: Timestamp,
}

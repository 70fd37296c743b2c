//! No-show payment-guarantee models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use speedai_core::types::{DbId, Timestamp};

/// A row from the `guarantee_sessions` table: a reservation protected by a
/// saved card.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuaranteeSession {
    pub id: DbId,
    pub customer_name: String,
    pub phone_number: String,
    pub reservation_at: Timestamp,
    pub party_size: i32,
    /// `confirmed`, `completed`, `no_show`, `canceled`.
    pub status: String,
    /// `card_saved`, `charged`, `refunded`.
    pub payment_status: String,
    pub amount_cents: i64,
}

/// A row from the `no_show_charges` table: the charge outcome for a
/// no-show reservation.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoShowCharge {
    pub id: DbId,
    pub session_id: DbId,
    pub amount_cents: i64,
    /// `succeeded` or `failed`.
    pub status: String,
    /// Set when the customer disputed the charge.
    pub disputed: bool,
    pub charged_at: Timestamp,
}

/// Aggregate guarantee statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuaranteeStats {
    pub protected_reservations: i64,
    pub no_shows: i64,
    pub recovered_cents: i64,
    pub dispute_count: i64,
}

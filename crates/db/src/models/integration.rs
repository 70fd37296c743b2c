//! Third-party order integration models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use speedai_core::types::{DbId, Timestamp};

/// A row from the `integration_orders` table: one order relayed by an
/// external delivery platform.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationOrder {
    pub id: DbId,
    /// Platform id: `ubereats`, `deliveroo`, `justeat`.
    pub source: String,
    /// The platform's own order identifier.
    pub external_id: String,
    pub amount_cents: i64,
    /// `received`, `preparing`, `delivered`, `canceled`.
    pub status: String,
    /// `delivery` or `pickup`.
    pub channel: String,
    pub created_at: Timestamp,
}

/// Aggregate integration statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationStats {
    pub total_orders: i64,
    pub total_revenue_cents: i64,
    pub ubereats_count: i64,
    pub deliveroo_count: i64,
    pub justeat_count: i64,
}

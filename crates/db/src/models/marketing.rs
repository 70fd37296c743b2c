//! Marketing campaign models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use speedai_core::types::DbId;

/// Aggregate marketing counters for one reporting period.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingSnapshot {
    pub total_contacts: i64,
    pub active_campaigns: i64,
    pub emails_sent: i64,
    pub sms_sent: i64,
    /// Open rate over sent emails, 0.0..=1.0.
    pub open_rate: f64,
    pub click_rate: f64,
}

/// A row from the `campaigns` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignRecord {
    pub id: DbId,
    pub name: String,
    /// Delivery channel: `email` or `sms`.
    pub channel: String,
    /// `draft`, `scheduled`, `sending`, `sent`.
    pub status: String,
    pub sent_count: i64,
    pub open_count: i64,
}

//! Account and settings models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use speedai_core::types::{DbId, Timestamp};

/// A row from the `users` table: the business owner account.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: DbId,
    pub email: String,
    pub business_name: String,
    /// Subscription plan: `starter`, `pro`, `premium`.
    pub plan: String,
    pub created_at: Timestamp,
}

/// A row from the `business_settings` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessSettings {
    pub language: String,
    pub timezone: String,
    pub notifications_enabled: bool,
    pub guarantee_enabled: bool,
    pub guarantee_amount_cents: i64,
    /// Free-form opening-hours text shown to callers.
    pub opening_hours: String,
}

/// Patch payload for `PUT /settings`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettings {
    pub language: Option<String>,
    pub timezone: Option<String>,
    pub notifications_enabled: Option<bool>,
    pub guarantee_enabled: Option<bool>,
    pub guarantee_amount_cents: Option<i64>,
    pub opening_hours: Option<String>,
}

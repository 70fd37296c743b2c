//! Repository for the `users` and `business_settings` tables.

use sqlx::PgPool;
use speedai_core::types::DbId;

use crate::models::account::{BusinessSettings, UpdateSettings, UserAccount};

/// Column list for `business_settings` queries.
const SETTINGS_COLUMNS: &str = "language, timezone, notifications_enabled, guarantee_enabled, \
                                guarantee_amount_cents, opening_hours";

/// Operations over the account and its settings.
pub struct AccountRepo;

impl AccountRepo {
    /// Fetch the owner account of a business.
    pub async fn get_user(
        pool: &PgPool,
        business_id: DbId,
    ) -> Result<Option<UserAccount>, sqlx::Error> {
        sqlx::query_as::<_, UserAccount>(
            "SELECT id, email, business_name, plan, created_at \
             FROM users WHERE business_id = $1",
        )
        .bind(business_id)
        .fetch_optional(pool)
        .await
    }

    /// Fetch the business settings row.
    pub async fn get_settings(
        pool: &PgPool,
        business_id: DbId,
    ) -> Result<Option<BusinessSettings>, sqlx::Error> {
        sqlx::query_as::<_, BusinessSettings>(&format!(
            "SELECT {SETTINGS_COLUMNS} FROM business_settings WHERE business_id = $1"
        ))
        .bind(business_id)
        .fetch_optional(pool)
        .await
    }

    /// Apply a partial settings update and return the new row.
    ///
    /// Absent patch fields keep their current value (COALESCE per column).
    pub async fn update_settings(
        pool: &PgPool,
        business_id: DbId,
        patch: &UpdateSettings,
    ) -> Result<Option<BusinessSettings>, sqlx::Error> {
        sqlx::query_as::<_, BusinessSettings>(&format!(
            "UPDATE business_settings SET \
                language = COALESCE($2, language), \
                timezone = COALESCE($3, timezone), \
                notifications_enabled = COALESCE($4, notifications_enabled), \
                guarantee_enabled = COALESCE($5, guarantee_enabled), \
                guarantee_amount_cents = COALESCE($6, guarantee_amount_cents), \
                opening_hours = COALESCE($7, opening_hours) \
             WHERE business_id = $1 \
             RETURNING {SETTINGS_COLUMNS}"
        ))
        .bind(business_id)
        .bind(patch.language.as_deref())
        .bind(patch.timezone.as_deref())
        .bind(patch.notifications_enabled)
        .bind(patch.guarantee_enabled)
        .bind(patch.guarantee_amount_cents)
        .bind(patch.opening_hours.as_deref())
        .fetch_optional(pool)
        .await
    }
}

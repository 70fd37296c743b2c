//! Repository for the `campaigns` and `marketing_snapshots` tables.

use sqlx::PgPool;
use speedai_core::timefilter::Period;
use speedai_core::types::DbId;

use crate::models::marketing::{CampaignRecord, MarketingSnapshot};

/// Read operations over marketing data.
pub struct CampaignRepo;

impl CampaignRepo {
    /// List all campaigns for the business, newest first.
    pub async fn list(
        pool: &PgPool,
        business_id: DbId,
    ) -> Result<Vec<CampaignRecord>, sqlx::Error> {
        sqlx::query_as::<_, CampaignRecord>(
            "SELECT id, name, channel, status, sent_count, open_count \
             FROM campaigns WHERE business_id = $1 ORDER BY id DESC",
        )
        .bind(business_id)
        .fetch_all(pool)
        .await
    }

    /// Fetch the precomputed aggregate counters for one reporting period.
    ///
    /// Snapshots are maintained by the campaign delivery workers; the
    /// dashboard only ever reads them.
    pub async fn snapshot(
        pool: &PgPool,
        business_id: DbId,
        period: Period,
    ) -> Result<Option<MarketingSnapshot>, sqlx::Error> {
        let period_key = match period {
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
            Period::All => "all",
        };

        sqlx::query_as::<_, MarketingSnapshot>(
            "SELECT total_contacts, active_campaigns, emails_sent, sms_sent, \
                    open_rate, click_rate \
             FROM marketing_snapshots WHERE business_id = $1 AND period = $2",
        )
        .bind(business_id)
        .bind(period_key)
        .fetch_optional(pool)
        .await
    }
}

//! Live [`DashboardStore`] implementation over Postgres.

use async_trait::async_trait;
use speedai_core::error::CoreError;
use speedai_core::timefilter::{Period, TimeFilter};
use speedai_core::types::DbId;

use crate::models::account::{BusinessSettings, UpdateSettings, UserAccount};
use crate::models::call::{CallRecord, CallStats};
use crate::models::guarantee::{GuaranteeSession, GuaranteeStats, NoShowCharge};
use crate::models::integration::{IntegrationOrder, IntegrationStats};
use crate::models::marketing::{CampaignRecord, MarketingSnapshot};
use crate::models::notification::NotificationRecord;
use crate::models::recommendation::Recommendation;
use crate::models::report::MonthlyReport;
use crate::models::review::{ReviewRecord, ReviewStats};
use crate::models::waitlist::WaitlistEntry;
use crate::repositories::{
    AccountRepo, CallRepo, CampaignRepo, GuaranteeRepo, NotificationRepo, OrderRepo,
    RecommendationRepo, ReportRepo, ReviewRepo, WaitlistRepo,
};
use crate::store::{CallQuery, DashboardStore, OrderQuery, Paged, ReviewQuery};
use crate::DbPool;

/// Tenant-scoped live store.
///
/// Constructed once at startup for the deployment's business. Session-based
/// tenant resolution lives above this layer.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
    business_id: DbId,
}

impl PgStore {
    pub fn new(pool: DbPool, business_id: DbId) -> Self {
        Self { pool, business_id }
    }
}

/// Map an infrastructure error, logging the detail and hiding it from the
/// client.
fn db_err(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "Database error");
    CoreError::Internal(err.to_string())
}

#[async_trait]
impl DashboardStore for PgStore {
    async fn list_calls(&self, query: &CallQuery) -> Result<Paged<CallRecord>, CoreError> {
        let (items, total) = CallRepo::list(
            &self.pool,
            self.business_id,
            query.status.as_deref(),
            query.search.as_deref(),
            query.page,
        )
        .await
        .map_err(db_err)?;
        Ok(Paged { items, total })
    }

    async fn get_call(&self, id: DbId) -> Result<CallRecord, CoreError> {
        CallRepo::get(&self.pool, self.business_id, id)
            .await
            .map_err(db_err)?
            .ok_or_else(CoreError::call_not_found)
    }

    async fn call_stats(&self, window: TimeFilter) -> Result<CallStats, CoreError> {
        let base = CallRepo::stats(&self.pool, self.business_id)
            .await
            .map_err(db_err)?;
        Ok(CallStats {
            total_calls: window.scale(base.total_calls),
            answered_calls: window.scale(base.answered_calls),
            missed_calls: window.scale(base.missed_calls),
            conversion_rate: base.conversion_rate,
            avg_duration_seconds: base.avg_duration_seconds,
        })
    }

    async fn list_reviews(&self, query: &ReviewQuery) -> Result<Paged<ReviewRecord>, CoreError> {
        let (items, total) = ReviewRepo::list(
            &self.pool,
            self.business_id,
            query.platform.as_deref(),
            query.rating_min,
            query.search.as_deref(),
            query.page,
        )
        .await
        .map_err(db_err)?;
        Ok(Paged { items, total })
    }

    async fn get_review(&self, id: DbId) -> Result<ReviewRecord, CoreError> {
        ReviewRepo::get(&self.pool, self.business_id, id)
            .await
            .map_err(db_err)?
            .ok_or_else(CoreError::review_not_found)
    }

    async fn review_stats(&self) -> Result<ReviewStats, CoreError> {
        ReviewRepo::stats(&self.pool, self.business_id)
            .await
            .map_err(db_err)
    }

    async fn marketing_stats(&self, period: Period) -> Result<MarketingSnapshot, CoreError> {
        CampaignRepo::snapshot(&self.pool, self.business_id, period)
            .await
            .map_err(db_err)?
            .ok_or_else(|| CoreError::Internal("missing marketing snapshot".into()))
    }

    async fn list_campaigns(&self) -> Result<Vec<CampaignRecord>, CoreError> {
        CampaignRepo::list(&self.pool, self.business_id)
            .await
            .map_err(db_err)
    }

    async fn list_guarantee_sessions(
        &self,
        status: Option<&str>,
    ) -> Result<Vec<GuaranteeSession>, CoreError> {
        GuaranteeRepo::list_sessions(&self.pool, self.business_id, status)
            .await
            .map_err(db_err)
    }

    async fn list_no_show_charges(&self) -> Result<Vec<NoShowCharge>, CoreError> {
        GuaranteeRepo::list_charges(&self.pool, self.business_id)
            .await
            .map_err(db_err)
    }

    async fn guarantee_stats(&self) -> Result<GuaranteeStats, CoreError> {
        GuaranteeRepo::stats(&self.pool, self.business_id)
            .await
            .map_err(db_err)
    }

    async fn list_orders(&self, query: &OrderQuery) -> Result<Vec<IntegrationOrder>, CoreError> {
        OrderRepo::list(
            &self.pool,
            self.business_id,
            query.source.as_deref(),
            query.status.as_deref(),
        )
        .await
        .map_err(db_err)
    }

    async fn integration_stats(&self) -> Result<IntegrationStats, CoreError> {
        OrderRepo::stats(&self.pool, self.business_id)
            .await
            .map_err(db_err)
    }

    async fn list_reports(&self) -> Result<Vec<MonthlyReport>, CoreError> {
        ReportRepo::list(&self.pool, self.business_id)
            .await
            .map_err(db_err)
    }

    async fn list_waitlist(&self) -> Result<Vec<WaitlistEntry>, CoreError> {
        WaitlistRepo::list(&self.pool, self.business_id)
            .await
            .map_err(db_err)
    }

    async fn list_recommendations(&self) -> Result<Vec<Recommendation>, CoreError> {
        RecommendationRepo::list(&self.pool, self.business_id)
            .await
            .map_err(db_err)
    }

    async fn list_notifications(
        &self,
        unread_only: bool,
    ) -> Result<Vec<NotificationRecord>, CoreError> {
        NotificationRepo::list(&self.pool, self.business_id, unread_only)
            .await
            .map_err(db_err)
    }

    async fn unread_count(&self) -> Result<i64, CoreError> {
        NotificationRepo::unread_count(&self.pool, self.business_id)
            .await
            .map_err(db_err)
    }

    async fn mark_notification_read(&self, id: DbId) -> Result<(), CoreError> {
        let found = NotificationRepo::mark_read(&self.pool, self.business_id, id)
            .await
            .map_err(db_err)?;
        if !found {
            return Err(CoreError::notification_not_found());
        }
        Ok(())
    }

    async fn mark_all_notifications_read(&self) -> Result<i64, CoreError> {
        let count = NotificationRepo::mark_all_read(&self.pool, self.business_id)
            .await
            .map_err(db_err)?;
        Ok(count as i64)
    }

    async fn current_user(&self) -> Result<UserAccount, CoreError> {
        AccountRepo::get_user(&self.pool, self.business_id)
            .await
            .map_err(db_err)?
            .ok_or_else(|| CoreError::Internal("missing account row".into()))
    }

    async fn get_settings(&self) -> Result<BusinessSettings, CoreError> {
        AccountRepo::get_settings(&self.pool, self.business_id)
            .await
            .map_err(db_err)?
            .ok_or_else(|| CoreError::Internal("missing settings row".into()))
    }

    async fn update_settings(
        &self,
        patch: &UpdateSettings,
    ) -> Result<BusinessSettings, CoreError> {
        AccountRepo::update_settings(&self.pool, self.business_id, patch)
            .await
            .map_err(db_err)?
            .ok_or_else(|| CoreError::Internal("missing settings row".into()))
    }
}

//! The dashboard data capability set.
//!
//! [`DashboardStore`] is the seam between HTTP handlers and data: the live
//! mode binds a Postgres-backed [`crate::PgStore`], demo mode binds the
//! in-memory fixture store. Which implementation a route table gets is
//! decided once, at startup, when the router is built — handlers never
//! know which mode they serve.

use async_trait::async_trait;
use serde::Serialize;
use speedai_core::error::CoreError;
use speedai_core::pagination::PageQuery;
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

/// One page of a list result plus the unpaged total.
#[derive(Debug, Clone, Serialize)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub total: i64,
}

/// Filters for the call log listing.
#[derive(Debug, Clone, Default)]
pub struct CallQuery {
    pub status: Option<String>,
    /// Case-insensitive substring over phone number and summary.
    pub search: Option<String>,
    pub page: PageQuery,
}

/// Filters for the review listing.
#[derive(Debug, Clone, Default)]
pub struct ReviewQuery {
    pub platform: Option<String>,
    /// Inclusive lower bound on the star rating.
    pub rating_min: Option<i32>,
    /// Case-insensitive substring over author and content.
    pub search: Option<String>,
    pub page: PageQuery,
}

/// Filters for the integration order listing.
#[derive(Debug, Clone, Default)]
pub struct OrderQuery {
    pub source: Option<String>,
    pub status: Option<String>,
}

/// Read (and three write) capabilities the dashboard needs from its data.
///
/// All reads are tenant-scoped by construction: an implementation is built
/// for exactly one business. Errors are domain errors; infrastructure
/// failures surface as [`CoreError::Internal`].
#[async_trait]
pub trait DashboardStore: Send + Sync {
    // --- Calls ---
    async fn list_calls(&self, query: &CallQuery) -> Result<Paged<CallRecord>, CoreError>;
    async fn get_call(&self, id: DbId) -> Result<CallRecord, CoreError>;
    async fn call_stats(&self, window: TimeFilter) -> Result<CallStats, CoreError>;

    // --- Reviews ---
    async fn list_reviews(&self, query: &ReviewQuery) -> Result<Paged<ReviewRecord>, CoreError>;
    async fn get_review(&self, id: DbId) -> Result<ReviewRecord, CoreError>;
    async fn review_stats(&self) -> Result<ReviewStats, CoreError>;

    // --- Marketing ---
    async fn marketing_stats(&self, period: Period) -> Result<MarketingSnapshot, CoreError>;
    async fn list_campaigns(&self) -> Result<Vec<CampaignRecord>, CoreError>;

    // --- No-show guarantee ---
    async fn list_guarantee_sessions(
        &self,
        status: Option<&str>,
    ) -> Result<Vec<GuaranteeSession>, CoreError>;
    async fn list_no_show_charges(&self) -> Result<Vec<NoShowCharge>, CoreError>;
    async fn guarantee_stats(&self) -> Result<GuaranteeStats, CoreError>;

    // --- Integrations ---
    async fn list_orders(&self, query: &OrderQuery) -> Result<Vec<IntegrationOrder>, CoreError>;
    async fn integration_stats(&self) -> Result<IntegrationStats, CoreError>;

    // --- Reports ---
    async fn list_reports(&self) -> Result<Vec<MonthlyReport>, CoreError>;

    // --- Waitlist / recommendations ---
    async fn list_waitlist(&self) -> Result<Vec<WaitlistEntry>, CoreError>;
    async fn list_recommendations(&self) -> Result<Vec<Recommendation>, CoreError>;

    // --- Notifications ---
    async fn list_notifications(
        &self,
        unread_only: bool,
    ) -> Result<Vec<NotificationRecord>, CoreError>;
    async fn unread_count(&self) -> Result<i64, CoreError>;
    async fn mark_notification_read(&self, id: DbId) -> Result<(), CoreError>;
    async fn mark_all_notifications_read(&self) -> Result<i64, CoreError>;

    // --- Account ---
    async fn current_user(&self) -> Result<UserAccount, CoreError>;
    async fn get_settings(&self) -> Result<BusinessSettings, CoreError>;
    async fn update_settings(
        &self,
        patch: &UpdateSettings,
    ) -> Result<BusinessSettings, CoreError>;
}

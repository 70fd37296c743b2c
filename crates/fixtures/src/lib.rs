//! In-memory [`DashboardStore`] serving the demo tenant.
//!
//! Built once at startup and read-only for the life of the process.
//! Filtering, pagination and stat scaling reproduce the semantics of the
//! SQL queries in `speedai-db` so a client cannot tell the modes apart by
//! behaviour, only by data.

pub mod data;

use std::collections::HashMap;

use async_trait::async_trait;
use speedai_core::error::CoreError;
use speedai_core::timefilter::{Period, TimeFilter};
use speedai_core::types::{DbId, Timestamp};

use speedai_db::models::account::{BusinessSettings, UpdateSettings, UserAccount};
use speedai_db::models::call::{CallRecord, CallStats};
use speedai_db::models::guarantee::{GuaranteeSession, GuaranteeStats, NoShowCharge};
use speedai_db::models::integration::{IntegrationOrder, IntegrationStats};
use speedai_db::models::marketing::{CampaignRecord, MarketingSnapshot};
use speedai_db::models::notification::NotificationRecord;
use speedai_db::models::recommendation::Recommendation;
use speedai_db::models::report::MonthlyReport;
use speedai_db::models::review::{ReviewRecord, ReviewStats};
use speedai_db::models::waitlist::WaitlistEntry;
use speedai_db::store::{CallQuery, DashboardStore, OrderQuery, Paged, ReviewQuery};

/// Case-insensitive substring match.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Newest-first ordering, id as tie-breaker (mirrors the SQL
/// `ORDER BY created_at DESC, id DESC`).
fn newest_first<T>(items: &mut [T], key: impl Fn(&T) -> (Timestamp, DbId)) {
    items.sort_by_key(|item| {
        let (at, id) = key(item);
        (std::cmp::Reverse(at), std::cmp::Reverse(id))
    });
}

/// The demo tenant's dataset.
pub struct FixtureStore {
    calls: Vec<CallRecord>,
    base_call_stats: CallStats,
    reviews: Vec<ReviewRecord>,
    snapshots: HashMap<Period, MarketingSnapshot>,
    campaigns: Vec<CampaignRecord>,
    sessions: Vec<GuaranteeSession>,
    charges: Vec<NoShowCharge>,
    orders: Vec<IntegrationOrder>,
    reports: Vec<MonthlyReport>,
    notifications: Vec<NotificationRecord>,
    waitlist: Vec<WaitlistEntry>,
    recommendations: Vec<Recommendation>,
    user: UserAccount,
    settings: BusinessSettings,
}

impl FixtureStore {
    /// Build the full demo dataset.
    pub fn new() -> Self {
        Self {
            calls: data::calls::calls(),
            base_call_stats: data::calls::base_stats(),
            reviews: data::reviews::reviews(),
            snapshots: data::marketing::snapshots(),
            campaigns: data::marketing::campaigns(),
            sessions: data::guarantee::sessions(),
            charges: data::guarantee::charges(),
            orders: data::integrations::orders(),
            reports: data::reports::reports(),
            notifications: data::notifications::notifications(),
            waitlist: data::waitlist::entries(),
            recommendations: data::recommendations::recommendations(),
            user: data::account::user(),
            settings: data::account::settings(),
        }
    }
}

impl Default for FixtureStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Demo mode never binds the mutating capabilities; if a caller reaches
/// one anyway, refuse rather than pretend to write.
fn read_only<T>() -> Result<T, CoreError> {
    Err(CoreError::Validation(
        "Les données de démonstration sont en lecture seule".to_string(),
    ))
}

#[async_trait]
impl DashboardStore for FixtureStore {
    async fn list_calls(&self, query: &CallQuery) -> Result<Paged<CallRecord>, CoreError> {
        let mut matches: Vec<CallRecord> = self
            .calls
            .iter()
            .filter(|c| query.status.as_deref().map_or(true, |s| c.status == s))
            .filter(|c| {
                query.search.as_deref().map_or(true, |s| {
                    contains_ci(&c.phone_number, s) || contains_ci(&c.summary, s)
                })
            })
            .cloned()
            .collect();
        newest_first(&mut matches, |c| (c.created_at, c.id));

        let total = matches.len() as i64;
        Ok(Paged {
            items: query.page.slice(&matches),
            total,
        })
    }

    async fn get_call(&self, id: DbId) -> Result<CallRecord, CoreError> {
        self.calls
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(CoreError::call_not_found)
    }

    async fn call_stats(&self, window: TimeFilter) -> Result<CallStats, CoreError> {
        let base = &self.base_call_stats;
        Ok(CallStats {
            total_calls: window.scale(base.total_calls),
            answered_calls: window.scale(base.answered_calls),
            missed_calls: window.scale(base.missed_calls),
            conversion_rate: base.conversion_rate,
            avg_duration_seconds: base.avg_duration_seconds,
        })
    }

    async fn list_reviews(&self, query: &ReviewQuery) -> Result<Paged<ReviewRecord>, CoreError> {
        let mut matches: Vec<ReviewRecord> = self
            .reviews
            .iter()
            .filter(|r| query.platform.as_deref().map_or(true, |p| r.platform == p))
            .filter(|r| query.rating_min.map_or(true, |min| r.rating >= min))
            .filter(|r| {
                query
                    .search
                    .as_deref()
                    .map_or(true, |s| contains_ci(&r.author, s) || contains_ci(&r.content, s))
            })
            .cloned()
            .collect();
        newest_first(&mut matches, |r| (r.created_at, r.id));

        let total = matches.len() as i64;
        Ok(Paged {
            items: query.page.slice(&matches),
            total,
        })
    }

    async fn get_review(&self, id: DbId) -> Result<ReviewRecord, CoreError> {
        self.reviews
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(CoreError::review_not_found)
    }

    async fn review_stats(&self) -> Result<ReviewStats, CoreError> {
        let total = self.reviews.len() as i64;
        let sum: i64 = self.reviews.iter().map(|r| r.rating as i64).sum();
        let count_for = |p: &str| self.reviews.iter().filter(|r| r.platform == p).count() as i64;

        Ok(ReviewStats {
            total_reviews: total,
            average_rating: if total == 0 {
                0.0
            } else {
                sum as f64 / total as f64
            },
            google_count: count_for("google"),
            tripadvisor_count: count_for("tripadvisor"),
            facebook_count: count_for("facebook"),
        })
    }

    async fn marketing_stats(&self, period: Period) -> Result<MarketingSnapshot, CoreError> {
        self.snapshots
            .get(&period)
            .cloned()
            .ok_or_else(|| CoreError::Internal("missing marketing snapshot".into()))
    }

    async fn list_campaigns(&self) -> Result<Vec<CampaignRecord>, CoreError> {
        Ok(self.campaigns.clone())
    }

    async fn list_guarantee_sessions(
        &self,
        status: Option<&str>,
    ) -> Result<Vec<GuaranteeSession>, CoreError> {
        Ok(self
            .sessions
            .iter()
            .filter(|s| status.map_or(true, |wanted| s.status == wanted))
            .cloned()
            .collect())
    }

    async fn list_no_show_charges(&self) -> Result<Vec<NoShowCharge>, CoreError> {
        Ok(self.charges.clone())
    }

    async fn guarantee_stats(&self) -> Result<GuaranteeStats, CoreError> {
        Ok(GuaranteeStats {
            protected_reservations: self.sessions.len() as i64,
            no_shows: self.sessions.iter().filter(|s| s.status == "no_show").count() as i64,
            recovered_cents: self
                .charges
                .iter()
                .filter(|c| c.status == "succeeded")
                .map(|c| c.amount_cents)
                .sum(),
            dispute_count: self.charges.iter().filter(|c| c.disputed).count() as i64,
        })
    }

    async fn list_orders(&self, query: &OrderQuery) -> Result<Vec<IntegrationOrder>, CoreError> {
        Ok(self
            .orders
            .iter()
            .filter(|o| query.source.as_deref().map_or(true, |s| o.source == s))
            .filter(|o| query.status.as_deref().map_or(true, |s| o.status == s))
            .cloned()
            .collect())
    }

    async fn integration_stats(&self) -> Result<IntegrationStats, CoreError> {
        let count_for = |s: &str| self.orders.iter().filter(|o| o.source == s).count() as i64;
        Ok(IntegrationStats {
            total_orders: self.orders.len() as i64,
            total_revenue_cents: self.orders.iter().map(|o| o.amount_cents).sum(),
            ubereats_count: count_for("ubereats"),
            deliveroo_count: count_for("deliveroo"),
            justeat_count: count_for("justeat"),
        })
    }

    async fn list_reports(&self) -> Result<Vec<MonthlyReport>, CoreError> {
        Ok(self.reports.clone())
    }

    async fn list_waitlist(&self) -> Result<Vec<WaitlistEntry>, CoreError> {
        Ok(self.waitlist.clone())
    }

    async fn list_recommendations(&self) -> Result<Vec<Recommendation>, CoreError> {
        Ok(self.recommendations.clone())
    }

    async fn list_notifications(
        &self,
        unread_only: bool,
    ) -> Result<Vec<NotificationRecord>, CoreError> {
        let mut matches: Vec<NotificationRecord> = self
            .notifications
            .iter()
            .filter(|n| !unread_only || !n.is_read)
            .cloned()
            .collect();
        newest_first(&mut matches, |n| (n.created_at, n.id));
        Ok(matches)
    }

    async fn unread_count(&self) -> Result<i64, CoreError> {
        Ok(self.notifications.iter().filter(|n| !n.is_read).count() as i64)
    }

    async fn mark_notification_read(&self, _id: DbId) -> Result<(), CoreError> {
        read_only()
    }

    async fn mark_all_notifications_read(&self) -> Result<i64, CoreError> {
        read_only()
    }

    async fn current_user(&self) -> Result<UserAccount, CoreError> {
        Ok(self.user.clone())
    }

    async fn get_settings(&self) -> Result<BusinessSettings, CoreError> {
        Ok(self.settings.clone())
    }

    async fn update_settings(
        &self,
        _patch: &UpdateSettings,
    ) -> Result<BusinessSettings, CoreError> {
        read_only()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use speedai_core::pagination::PageQuery;

    fn store() -> FixtureStore {
        FixtureStore::new()
    }

    #[tokio::test]
    async fn call_page_two_returns_records_eleven_to_twenty() {
        let page = PageQuery::from_params(Some("2"), Some("10"), 10);
        let result = store()
            .list_calls(&CallQuery {
                page,
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(result.total, 28);
        assert_eq!(result.items.len(), 10);
        assert_eq!(result.items.first().unwrap().id, 11);
        assert_eq!(result.items.last().unwrap().id, 20);
    }

    #[tokio::test]
    async fn call_search_is_case_insensitive() {
        let result = store()
            .list_calls(&CallQuery {
                search: Some("RÉSERVATION".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(result.total > 0);
        assert!(result
            .items
            .iter()
            .all(|c| c.summary.to_lowercase().contains("réservation")));
    }

    #[tokio::test]
    async fn call_stats_scale_by_window() {
        let s = store();
        let week = s.call_stats(TimeFilter::Week).await.unwrap();
        let today = s.call_stats(TimeFilter::Today).await.unwrap();

        assert_eq!(week.total_calls, 247);
        assert_eq!(today.total_calls, 74); // round(247 * 0.3)
        assert_eq!(today.conversion_rate, week.conversion_rate);
    }

    #[tokio::test]
    async fn unknown_call_id_is_not_found() {
        let err = store().get_call(999).await.unwrap_err();
        assert_matches!(err, CoreError::NotFound { message } if message == "Appel non trouvé");
    }

    #[tokio::test]
    async fn review_platform_and_rating_filters_combine() {
        let result = store()
            .list_reviews(&ReviewQuery {
                platform: Some("google".into()),
                rating_min: Some(4),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(result.total > 0);
        assert!(result
            .items
            .iter()
            .all(|r| r.platform == "google" && r.rating >= 4));
    }

    #[tokio::test]
    async fn guarantee_stats_are_consistent_with_the_dataset() {
        let stats = store().guarantee_stats().await.unwrap();
        assert_eq!(stats.protected_reservations, 8);
        assert_eq!(stats.no_shows, 2);
        assert_eq!(stats.recovered_cents, 12000);
        assert_eq!(stats.dispute_count, 1);
    }

    #[tokio::test]
    async fn every_notification_kind_appears_exactly_once() {
        let all = store().list_notifications(false).await.unwrap();
        assert_eq!(all.len(), 18);

        let unread = store().list_notifications(true).await.unwrap();
        assert_eq!(unread.len() as i64, store().unread_count().await.unwrap());
        assert!(unread.iter().all(|n| !n.is_read));
    }

    #[tokio::test]
    async fn mutations_are_refused() {
        assert_matches!(
            store().mark_all_notifications_read().await,
            Err(CoreError::Validation(_))
        );
    }

    #[tokio::test]
    async fn fixture_records_serialize_camel_case() {
        let call = store().get_call(1).await.unwrap();
        let json = serde_json::to_value(&call).unwrap();
        assert!(json.get("phoneNumber").is_some());
        assert!(json.get("durationSeconds").is_some());
        assert!(json.get("phone_number").is_none());
    }
}

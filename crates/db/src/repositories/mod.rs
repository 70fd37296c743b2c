//! Per-area repositories over the Postgres schema.
//!
//! Static structs with associated functions taking the pool, one per
//! business area. Every query is scoped to a `business_id` — the platform
//! is multi-tenant and no query may cross tenants.

mod account_repo;
mod call_repo;
mod campaign_repo;
mod guarantee_repo;
mod notification_repo;
mod order_repo;
mod recommendation_repo;
mod report_repo;
mod review_repo;
mod waitlist_repo;

pub use account_repo::AccountRepo;
pub use call_repo::CallRepo;
pub use campaign_repo::CampaignRepo;
pub use guarantee_repo::GuaranteeRepo;
pub use notification_repo::NotificationRepo;
pub use order_repo::OrderRepo;
pub use recommendation_repo::RecommendationRepo;
pub use report_repo::ReportRepo;
pub use review_repo::ReviewRepo;
pub use waitlist_repo::WaitlistRepo;

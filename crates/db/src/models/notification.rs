//! In-app notification models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use speedai_core::types::{DbId, Timestamp};

/// Everything the dashboard can notify a business about.
///
/// Stored as the `notification_kind` Postgres enum in `notifications.kind`;
/// serialized snake_case on the wire. The client maps each kind to an icon
/// and a navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "notification_kind", rename_all = "snake_case")]
pub enum NotificationKind {
    NewCall,
    MissedCall,
    NewReview,
    NegativeReview,
    CampaignSent,
    CampaignCompleted,
    NoShowCharged,
    NoShowDispute,
    PaymentSucceeded,
    PaymentFailed,
    SubscriptionRenewed,
    SubscriptionCanceled,
    ReportReady,
    ReportFailed,
    IntegrationConnected,
    IntegrationError,
    NewOrder,
    WaitlistJoined,
}

/// A row from the `notifications` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRecord {
    pub id: DbId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: Timestamp,
}

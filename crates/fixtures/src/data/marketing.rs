//! Marketing fixtures: per-period snapshots and the campaign list.

use std::collections::HashMap;

use speedai_core::timefilter::Period;
use speedai_db::models::marketing::{CampaignRecord, MarketingSnapshot};

fn snapshot(
    total_contacts: i64,
    active_campaigns: i64,
    emails_sent: i64,
    sms_sent: i64,
    open_rate: f64,
    click_rate: f64,
) -> MarketingSnapshot {
    MarketingSnapshot {
        total_contacts,
        active_campaigns,
        emails_sent,
        sms_sent,
        open_rate,
        click_rate,
    }
}

/// One precomputed snapshot per reporting period, mirroring the
/// `marketing_snapshots` table the live workers maintain.
pub fn snapshots() -> HashMap<Period, MarketingSnapshot> {
    HashMap::from([
        (Period::Week, snapshot(1843, 2, 412, 96, 0.38, 0.071)),
        (Period::Month, snapshot(1843, 3, 1687, 342, 0.41, 0.064)),
        (Period::Year, snapshot(1843, 3, 18452, 3710, 0.37, 0.058)),
        (Period::All, snapshot(1843, 3, 24806, 5123, 0.36, 0.055)),
    ])
}

fn campaign(
    id: i64,
    name: &str,
    channel: &str,
    status: &str,
    sent_count: i64,
    open_count: i64,
) -> CampaignRecord {
    CampaignRecord {
        id,
        name: name.to_string(),
        channel: channel.to_string(),
        status: status.to_string(),
        sent_count,
        open_count,
    }
}

/// The demo campaign list, newest first.
pub fn campaigns() -> Vec<CampaignRecord> {
    vec![
        campaign(6, "Menu de rentrée — septembre", "email", "scheduled", 0, 0),
        campaign(5, "Soirée dégustation Beaujolais", "email", "sending", 634, 187),
        campaign(4, "Rappel réservation week-end du 15 août", "sms", "sent", 342, 0),
        campaign(3, "Offre fidélité : dessert offert", "email", "sent", 1721, 806),
        campaign(2, "Nouvelle carte d'été", "email", "sent", 1687, 698),
        campaign(1, "Brunch du dimanche — lancement", "sms", "sent", 289, 0),
    ]
}

//! Hand-authored demo tenant: "Le Vieux Moulin", a Lyon restaurant.
//!
//! One plausible, fully-populated dataset per business area. Record shapes
//! are the live models themselves, so every fixture serializes exactly
//! like its live counterpart. Data is built once at startup and never
//! mutated.

pub mod account;
pub mod calls;
pub mod guarantee;
pub mod integrations;
pub mod marketing;
pub mod notifications;
pub mod recommendations;
pub mod reports;
pub mod reviews;
pub mod waitlist;

use chrono::{TimeZone, Utc};
use speedai_core::types::Timestamp;

/// Fixed fixture timestamp, CEST business hours expressed in UTC.
pub(crate) fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Timestamp {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .expect("valid fixture timestamp")
}

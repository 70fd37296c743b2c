//! HTTP handlers, one module per business area.
//!
//! Handlers are pure functions of (store, query parameters): the same
//! function serves the canonical `/api` table and the `/api/demo` table,
//! differing only in which [`speedai_db::DashboardStore`] the state holds.

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

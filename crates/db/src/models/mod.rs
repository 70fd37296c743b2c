//! Entity models shared by the live (Postgres) and demo (fixture) stores.
//!
//! Wire format is camelCase JSON; Rust/SQL use snake_case. Every fixture
//! record serializes to exactly the same shape as its live counterpart so
//! the client needs no branching between modes.

pub mod account;
pub mod call;
pub mod guarantee;
pub mod integration;
pub mod marketing;
pub mod notification;
pub mod recommendation;
pub mod report;
pub mod review;
pub mod waitlist;

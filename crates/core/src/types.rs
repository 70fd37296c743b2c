//! Primitive aliases shared across the workspace.

/// Primary keys are BIGSERIAL in Postgres; fixture ids use the same type.
pub type DbId = i64;

/// Timestamps are stored and served in UTC; display timezones are a
/// client concern.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

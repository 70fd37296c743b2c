//! Shared domain primitives for the SpeedAI dashboard backend.
//!
//! Pure types and functions only: no I/O, no async. The demo-mode path
//! rewrite rule lives here because both the server (route registration)
//! and any client-side cache-key construction must agree on it exactly.

pub mod error;
pub mod pagination;
pub mod rewrite;
pub mod timefilter;
pub mod types;

pub use error::CoreError;

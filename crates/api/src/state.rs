use std::sync::Arc;

use speedai_db::DashboardStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable. The store is the [`DashboardStore`] trait object:
/// the `/api` table gets the Postgres-backed store, the `/api/demo` table
/// gets the fixture store, and handlers cannot tell which one they hold.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DashboardStore>,
    pub config: Arc<ServerConfig>,
}

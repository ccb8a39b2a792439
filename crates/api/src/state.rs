use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable; the pool is already reference-counted and the
/// config sits behind an `Arc`. Handlers never cache entries here — the pool
/// is the sole owner of persisted state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: faqd_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

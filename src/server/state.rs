/**
 * Application State
 *
 * `AppState` is the only state shared between requests: the database
 * pool and the read-only configuration. Everything else (decoded bodies,
 * the caller's id, repository instances) is request-scoped and discarded
 * when the response is written.
 */

use sqlx::PgPool;
use std::sync::Arc;

use crate::server::config::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool; connections are pool-borrowed per
    /// request and returned on every exit path.
    pub pool: PgPool,
    /// Immutable configuration loaded at startup.
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(pool: PgPool, config: AppConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }
}

/**
 * Application State
 *
 * The state handed to every handler: the connection pool, the configuration,
 * and the optional mailer. There is no other shared mutable state; the pool
 * serializes concurrent writes and everything else here is immutable after
 * startup.
 */

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::mailer::Mailer;
use crate::server::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Arc<AppConfig>,
    /// `None` when the SMTP account is not configured
    pub mailer: Option<Mailer>,
}

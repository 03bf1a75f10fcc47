/**
 * Server Initialization
 *
 * Builds the Axum application from a configuration: opens the store, builds
 * the optional mailer, assembles the router.
 *
 * # Initialization Steps
 *
 * 1. Connect to SQLite and create the schema if missing
 * 2. Build the SMTP mailer if the account is configured
 * 3. Assemble application state and the router
 *
 * A database failure aborts startup; a missing mail account only disables
 * the contact form.
 */

use std::sync::Arc;

use axum::Router;

use crate::error::AppError;
use crate::mailer::Mailer;
use crate::routes::create_router;
use crate::server::config::AppConfig;
use crate::server::state::AppState;
use crate::store;

/// Create the Axum application for a configuration.
pub async fn create_app(config: AppConfig) -> Result<Router, AppError> {
    tracing::info!("connecting to database at {}", config.database_url);
    let pool = store::connect(&config.database_url).await?;
    tracing::info!("database ready");

    let mailer = match &config.smtp {
        Some(smtp) => {
            let mailer = Mailer::from_config(smtp)?;
            tracing::info!("mailer configured for relay {}", smtp.host);
            Some(mailer)
        }
        None => None,
    };

    let state = AppState {
        pool,
        config: Arc::new(config),
        mailer,
    };

    Ok(create_router(state))
}

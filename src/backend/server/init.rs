/**
 * Server Initialization
 *
 * Builds the application state from a `PlatformConfig` and assembles the
 * router.
 *
 * # Initialization Process
 *
 * 1. Build the HTTP client for remote overrides
 * 2. Create the shared state (resolver, aggregator, seed store)
 * 3. Create the router with every route and the tracing layer
 */

use axum::Router;

use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::build_http_client;
use crate::backend::server::state::AppState;
use crate::shared::PlatformConfig;

/// Create and configure the Axum application
pub fn create_app(config: PlatformConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing {} backend server", config.service_name);

    let client = build_http_client(&config)?;
    let app_state = AppState::new(config, client);

    if !app_state.config.seeds_dir.is_dir() {
        tracing::warn!(
            "Seeds directory {} not found; counts will be 0 and /ready will answer 503",
            app_state.config.seeds_dir.display()
        );
    }

    let app = create_router(app_state);
    tracing::info!("Router configured");

    Ok(app)
}

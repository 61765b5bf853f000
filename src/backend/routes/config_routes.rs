/**
 * Effective Configuration Routes
 *
 * What rendering code consumes: the resolved flags and settings and the
 * module entries they enable.
 *
 * - `GET /flags` - Effective feature flags
 * - `GET /app-settings` - Effective app settings
 * - `GET /modules` - Enabled registry modules
 */

use axum::{routing::get, Router};

use crate::backend::resolver::handlers::{
    get_effective_flags, get_effective_settings, get_enabled_modules,
};
use crate::backend::server::state::AppState;

/// Configure effective-configuration routes
pub fn configure_config_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/flags", get(get_effective_flags))
        .route("/app-settings", get(get_effective_settings))
        .route("/modules", get(get_enabled_modules))
}

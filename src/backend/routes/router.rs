/**
 * Router Configuration
 *
 * Combines every route group into one Axum router, adds request tracing and
 * a JSON 404 fallback.
 */

use axum::{http::StatusCode, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::admin_routes::configure_admin_routes;
use crate::backend::routes::config_routes::configure_config_routes;
use crate::backend::routes::status_routes::configure_status_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// 1. **Status Routes**: `/ready`, `/admin/status`, `/version`
/// 2. **Config Routes**: `/flags`, `/app-settings`, `/modules`
/// 3. **Admin Routes**: `/admin/flags`, `/public/app-settings`
/// 4. **Fallback**: JSON 404
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    let router = configure_status_routes(router);
    let router = configure_config_routes(router);
    let router = configure_admin_routes(router);

    let router = router.fallback(|| async {
        BackendError::handler(StatusCode::NOT_FOUND, "Not Found")
    });

    router
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}

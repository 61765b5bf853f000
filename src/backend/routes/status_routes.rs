/**
 * Status Route Handlers
 *
 * - `GET /ready` - Readiness probe (200 / 503)
 * - `GET /admin/status` - Full status report
 * - `GET /version` - Build identity
 */

use axum::{routing::get, Router};

use crate::backend::server::state::AppState;
use crate::backend::status::handlers::{get_admin_status, get_ready, get_version};

/// Configure status routes
pub fn configure_status_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/ready", get(get_ready))
        .route("/admin/status", get(get_admin_status))
        .route("/version", get(get_version))
}

/**
 * Admin API Routes
 *
 * - `GET /admin/flags` - Stored flag mapping
 * - `PUT /admin/flags` - Replace the stored flag mapping
 * - `GET /public/app-settings` - Stored settings mapping
 */

use axum::{routing::get, Router};

use crate::backend::admin::handlers::{get_admin_flags, get_public_app_settings, put_admin_flags};
use crate::backend::server::state::AppState;

/// Configure admin API routes
pub fn configure_admin_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/admin/flags", get(get_admin_flags).put(put_admin_flags))
        .route("/public/app-settings", get(get_public_app_settings))
}

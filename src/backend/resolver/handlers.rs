use axum::{extract::State, Json};

use crate::backend::resolver::ConfigResolver;
use crate::shared::{enabled_modules, AppSettings, FeatureFlags, ModuleInfo};

/// `GET /flags` - effective feature flags
pub async fn get_effective_flags(State(resolver): State<ConfigResolver>) -> Json<FeatureFlags> {
    Json(resolver.resolve_flags().await)
}

/// `GET /app-settings` - effective branding and contact settings
pub async fn get_effective_settings(State(resolver): State<ConfigResolver>) -> Json<AppSettings> {
    Json(resolver.resolve_settings().await)
}

/// `GET /modules` - registry entries enabled by the effective flags
pub async fn get_enabled_modules(
    State(resolver): State<ConfigResolver>,
) -> Json<Vec<&'static ModuleInfo>> {
    let flags = resolver.resolve_flags().await;
    Json(enabled_modules(&flags))
}

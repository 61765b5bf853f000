use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{Map, Value};

use crate::backend::admin::SeedStore;
use crate::backend::error::BackendError;
use crate::shared::FeatureFlags;

/// `GET /admin/flags` - stored flag mapping
pub async fn get_admin_flags(State(store): State<SeedStore>) -> Json<FeatureFlags> {
    Json(store.read_flags().await)
}

/// `PUT /admin/flags` - replace the stored flag mapping
///
/// Body rejections (missing content type, bad JSON syntax) are answered
/// with the same 400 JSON error shape as validation failures.
pub async fn put_admin_flags(
    State(store): State<SeedStore>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<FeatureFlags>, BackendError> {
    let Json(payload) = payload.map_err(|rejection| {
        BackendError::handler(
            StatusCode::BAD_REQUEST,
            format!("Invalid request body: {}", rejection.body_text()),
        )
    })?;

    let flags = store.write_flags(&payload).await?;
    Ok(Json(flags))
}

/// `GET /public/app-settings` - stored settings mapping
pub async fn get_public_app_settings(State(store): State<SeedStore>) -> Json<Map<String, Value>> {
    Json(store.read_app_settings().await)
}

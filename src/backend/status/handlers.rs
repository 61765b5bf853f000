use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;

use crate::backend::status::StatusAggregator;
use crate::shared::{Readiness, StatusReport, VersionInfo};

/// `GET /ready` - 200 when the readiness seed is readable, 503 otherwise
pub async fn get_ready(State(aggregator): State<StatusAggregator>) -> (StatusCode, Json<Readiness>) {
    let ready = aggregator.check_readiness().await;
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(Readiness {
            ready,
            checked_at: Utc::now(),
        }),
    )
}

/// `GET /admin/status`
pub async fn get_admin_status(State(aggregator): State<StatusAggregator>) -> Json<StatusReport> {
    Json(aggregator.get_status().await)
}

/// `GET /version`
pub async fn get_version(State(aggregator): State<StatusAggregator>) -> Json<VersionInfo> {
    Json(aggregator.version_info().await)
}

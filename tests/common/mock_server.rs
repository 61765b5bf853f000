//! Mock admin API helpers
//!
//! Wraps `wiremock` to stand in for the remote admin endpoints the config
//! resolver fetches.

use std::time::Duration;

use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const FLAGS_PATH: &str = "/admin/flags";
pub const SETTINGS_PATH: &str = "/public/app-settings";

/// Start a mock admin API
pub async fn start_admin_api() -> MockServer {
    MockServer::start().await
}

/// Answer `GET route` with a JSON body
pub async fn mock_json(server: &MockServer, route: &str, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

/// Answer `GET route` with a raw text body
pub async fn mock_text(server: &MockServer, route: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

/// Answer `GET route` with a JSON body after `delay`
pub async fn mock_slow(server: &MockServer, route: &str, body: Value, delay: Duration) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body).set_delay(delay))
        .mount(server)
        .await;
}

/// Fail verification (when the server drops) if `route` is ever requested
pub async fn expect_no_requests(server: &MockServer, route: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(0)
        .mount(server)
        .await;
}

/**
 * Server Configuration
 *
 * Loads the platform configuration from the environment and builds the
 * shared HTTP client used for remote overrides.
 *
 * # Error Handling
 *
 * Unlike the resolver, configuration problems are fatal: an invalid API URL
 * or timeout stops startup with a `BackendError`.
 */

use std::time::Duration;

use reqwest::Client;

use crate::backend::error::BackendError;
use crate::shared::PlatformConfig;

/// Upper bound for establishing a connection to the admin API
const CONNECT_TIMEOUT: Duration = Duration::from_secs(1);

/// Load the platform configuration from the process environment
pub fn load_platform_config() -> Result<PlatformConfig, BackendError> {
    let config = PlatformConfig::from_env()?;

    tracing::info!(
        "Configuration loaded (env: {}, namespace: {}, seeds: {})",
        config.env_name,
        config.data_namespace,
        config.seeds_dir.display()
    );
    if config.remote_flags || config.remote_settings {
        tracing::info!(
            "Remote overrides enabled (flags: {}, settings: {}) from {} with {:?} timeout",
            config.remote_flags,
            config.remote_settings,
            config.api_url,
            config.fetch_timeout
        );
    } else {
        tracing::info!("Remote overrides disabled, using environment defaults only");
    }

    Ok(config)
}

/// HTTP client for the admin API.
///
/// Each request is additionally bounded by `fetch_timeout` in the resolver.
pub fn build_http_client(config: &PlatformConfig) -> Result<Client, BackendError> {
    Client::builder()
        .connect_timeout(CONNECT_TIMEOUT.min(config.fetch_timeout))
        .timeout(config.fetch_timeout)
        .user_agent(format!("{}/{}", config.service_name, env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| BackendError::startup(format!("Failed to build HTTP client: {}", e)))
}

//! Config Resolver
//!
//! Produces the effective feature flags and app settings by layering an
//! optional remote source over the environment-derived defaults held in
//! [`PlatformConfig`].
//!
//! # Contract
//!
//! - Resolution never fails. Network errors, non-2xx answers, malformed
//!   bodies and timeouts are logged and the environment defaults are used.
//! - When a remote toggle is off, no request is made.
//! - Remote keys win key by key (shallow merge).
//! - Nothing is cached; every call resolves afresh.

/// Remote admin endpoint client
pub mod remote;

/// HTTP handlers exposing the effective configuration
pub mod handlers;

use std::sync::Arc;

use reqwest::Client;

use crate::shared::{AppSettings, FeatureFlags, PlatformConfig};
use remote::RemoteConfigClient;

pub use remote::RemoteError;

/// Admin API path serving the remote flag mapping
pub const REMOTE_FLAGS_PATH: &str = "/admin/flags";

/// Admin API path serving the remote settings mapping
pub const REMOTE_SETTINGS_PATH: &str = "/public/app-settings";

#[derive(Debug, Clone)]
pub struct ConfigResolver {
    config: Arc<PlatformConfig>,
    remote: RemoteConfigClient,
}

impl ConfigResolver {
    pub fn new(config: Arc<PlatformConfig>, client: Client) -> Self {
        let remote = RemoteConfigClient::new(client, config.clone());
        Self { config, remote }
    }

    /// Effective feature flags: environment defaults, overlaid by the remote
    /// mapping when remote flags are enabled and reachable.
    pub async fn resolve_flags(&self) -> FeatureFlags {
        let mut flags = self.config.default_flags.clone();
        if !self.config.remote_flags {
            return flags;
        }

        match self.remote.fetch_object(REMOTE_FLAGS_PATH).await {
            Ok(remote) => {
                let applied = flags.overlay(&remote);
                tracing::debug!("Applied {} remote flag overrides", applied);
            }
            Err(err) => {
                tracing::warn!("Remote flags unavailable, using environment defaults: {}", err);
            }
        }

        flags
    }

    /// The remote flag mapping on its own.
    ///
    /// Empty when remote flags are disabled or the fetch fails.
    pub async fn remote_flags(&self) -> FeatureFlags {
        let mut flags = FeatureFlags::default();
        if !self.config.remote_flags {
            return flags;
        }

        match self.remote.fetch_object(REMOTE_FLAGS_PATH).await {
            Ok(remote) => {
                flags.overlay(&remote);
            }
            Err(err) => tracing::warn!("Remote flags unavailable: {}", err),
        }

        flags
    }

    /// Effective app settings: environment defaults, overlaid by the remote
    /// mapping when remote settings are enabled and reachable.
    pub async fn resolve_settings(&self) -> AppSettings {
        let defaults = &self.config.default_settings;
        if !self.config.remote_settings {
            return defaults.clone();
        }

        let remote = match self.remote.fetch_object(REMOTE_SETTINGS_PATH).await {
            Ok(remote) => remote,
            Err(err) => {
                tracing::warn!("Remote settings unavailable, using environment defaults: {}", err);
                return defaults.clone();
            }
        };

        match defaults.overlay(&remote) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!("Remote settings malformed, using environment defaults: {}", err);
                defaults.clone()
            }
        }
    }
}

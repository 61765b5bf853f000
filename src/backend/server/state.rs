/**
 * Application State Management
 *
 * `AppState` is the central state container shared by every handler. All
 * members are cheap to clone (`Arc`s and a pooled HTTP client inside), and
 * the `FromRef` implementations let a handler extract only the part it
 * needs, e.g. `State<StatusAggregator>`.
 *
 * Nothing in here is mutated after startup; the only mutable state in the
 * server is the admin seed files on disk.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::admin::SeedStore;
use crate::backend::resolver::ConfigResolver;
use crate::backend::status::StatusAggregator;
use crate::shared::PlatformConfig;

/// Application state shared across all request handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Immutable configuration read at startup
    pub config: Arc<PlatformConfig>,

    /// Effective flags/settings resolution
    pub resolver: ConfigResolver,

    /// Status, version and readiness reporting
    pub aggregator: StatusAggregator,

    /// Seed-backed admin API storage
    pub seed_store: SeedStore,
}

impl AppState {
    /// Wire every component to the same configuration and HTTP client
    pub fn new(config: PlatformConfig, client: reqwest::Client) -> Self {
        let config = Arc::new(config);
        let resolver = ConfigResolver::new(config.clone(), client);
        let aggregator = StatusAggregator::new(config.clone(), resolver.clone());
        let seed_store = SeedStore::new(config.clone());

        Self {
            config,
            resolver,
            aggregator,
            seed_store,
        }
    }
}

impl FromRef<AppState> for Arc<PlatformConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

impl FromRef<AppState> for ConfigResolver {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.resolver.clone()
    }
}

impl FromRef<AppState> for StatusAggregator {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.aggregator.clone()
    }
}

impl FromRef<AppState> for SeedStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.seed_store.clone()
    }
}

//! Platform configuration module
//!
//! Everything the resolver and the status aggregator read from the process
//! environment is collected once into an immutable [`PlatformConfig`].
//! [`PlatformConfig::from_env`] reads the real environment;
//! [`PlatformConfig::from_lookup`] accepts any lookup function, which is what
//! tests use.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::shared::flags::FeatureFlags;
use crate::shared::settings::AppSettings;

/// Service name reported by `/version` and `/admin/status`
pub const SERVICE_NAME: &str = "droobi-api";

const DEFAULT_API_URL: &str = "http://127.0.0.1:4000";
const DEFAULT_ENV_NAME: &str = "development";
const DEFAULT_DATA_NAMESPACE: &str = "default";
const DEFAULT_SEEDS_DIR: &str = "seeds";
const DEFAULT_MANIFEST: &str = "Cargo.toml";
const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_millis(2000);

/// Resolved platform configuration
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    pub service_name: String,
    /// Base URL of the admin API the remote overrides are fetched from
    pub api_url: String,
    pub remote_flags: bool,
    pub remote_settings: bool,
    /// Flags derived from `NEXT_PUBLIC_FLAGS` over the all-false baseline
    pub default_flags: FeatureFlags,
    /// Settings derived from the per-field environment overrides
    pub default_settings: AppSettings,
    pub env_name: String,
    pub data_namespace: String,
    /// Build commit, empty when unset
    pub build_sha: String,
    pub seeds_dir: PathBuf,
    pub manifest_path: PathBuf,
    pub fetch_timeout: Duration,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            service_name: SERVICE_NAME.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            remote_flags: false,
            remote_settings: false,
            default_flags: FeatureFlags::baseline(),
            default_settings: AppSettings::default(),
            env_name: DEFAULT_ENV_NAME.to_string(),
            data_namespace: DEFAULT_DATA_NAMESPACE.to_string(),
            build_sha: String::new(),
            seeds_dir: PathBuf::from(DEFAULT_SEEDS_DIR),
            manifest_path: PathBuf::from(DEFAULT_MANIFEST),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}

impl PlatformConfig {
    /// Create a new PlatformConfigBuilder
    pub fn builder() -> PlatformConfigBuilder {
        PlatformConfigBuilder::default()
    }

    /// Build the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut builder = Self::builder()
            .remote_flags(get("NEXT_PUBLIC_REMOTE_FLAGS").is_some_and(|v| is_truthy(&v)))
            .remote_settings(get("NEXT_PUBLIC_REMOTE_SETTINGS").is_some_and(|v| is_truthy(&v)))
            .default_flags(FeatureFlags::from_env_spec(
                &get("NEXT_PUBLIC_FLAGS").unwrap_or_default(),
            ))
            .default_settings(AppSettings::from_lookup(&lookup));

        if let Some(url) = get("NEXT_PUBLIC_API_URL") {
            builder = builder.api_url(url);
        }
        if let Some(name) = get("ENV_NAME") {
            builder = builder.env_name(name);
        }
        if let Some(ns) = get("DATA_NAMESPACE") {
            builder = builder.data_namespace(ns);
        }
        if let Some(sha) = get("GITHUB_SHA") {
            builder = builder.build_sha(sha);
        }
        if let Some(dir) = get("SEEDS_DIR") {
            builder = builder.seeds_dir(dir);
        }
        if let Some(path) = get("PACKAGE_MANIFEST") {
            builder = builder.manifest_path(path);
        }
        if let Some(raw) = get("REMOTE_FETCH_TIMEOUT_MS") {
            let millis = raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                key: "REMOTE_FETCH_TIMEOUT_MS",
                value: raw.clone(),
            })?;
            builder = builder.fetch_timeout(Duration::from_millis(millis));
        }

        builder.build()
    }

    /// Full URL for a path on the admin API
    pub fn api_endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url.trim_end_matches('/'), path)
    }

    /// Path of a file inside the seeds directory
    pub fn seed_path(&self, name: &str) -> PathBuf {
        self.seeds_dir.join(name)
    }
}

/// `1`, `true`, `yes` and `on` (any case) enable a toggle
fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Builder for PlatformConfig
#[derive(Debug, Default)]
pub struct PlatformConfigBuilder {
    config: PlatformConfig,
}

impl PlatformConfigBuilder {
    /// Service name reported by status and version
    pub fn service_name(mut self, name: impl Into<String>) -> Self {
        self.config.service_name = name.into();
        self
    }

    /// Base URL of the admin API
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Fetch flags from the admin API
    pub fn remote_flags(mut self, enabled: bool) -> Self {
        self.config.remote_flags = enabled;
        self
    }

    /// Fetch app settings from the admin API
    pub fn remote_settings(mut self, enabled: bool) -> Self {
        self.config.remote_settings = enabled;
        self
    }

    /// Environment flag defaults
    pub fn default_flags(mut self, flags: FeatureFlags) -> Self {
        self.config.default_flags = flags;
        self
    }

    /// Environment settings defaults
    pub fn default_settings(mut self, settings: AppSettings) -> Self {
        self.config.default_settings = settings;
        self
    }

    /// Deployment environment name
    pub fn env_name(mut self, name: impl Into<String>) -> Self {
        self.config.env_name = name.into();
        self
    }

    /// Data namespace label
    pub fn data_namespace(mut self, ns: impl Into<String>) -> Self {
        self.config.data_namespace = ns.into();
        self
    }

    /// Build commit identifier
    pub fn build_sha(mut self, sha: impl Into<String>) -> Self {
        self.config.build_sha = sha.into();
        self
    }

    /// Directory holding the seed files
    pub fn seeds_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.seeds_dir = dir.into();
        self
    }

    /// Package manifest read for the version
    pub fn manifest_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.manifest_path = path.into();
        self
    }

    /// Upper bound on each remote fetch
    pub fn fetch_timeout(mut self, timeout: Duration) -> Self {
        self.config.fetch_timeout = timeout;
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<PlatformConfig, ConfigError> {
        let config = self.config;

        let url = reqwest::Url::parse(&config.api_url)
            .map_err(|_| ConfigError::InvalidUrl(config.api_url.clone()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl(config.api_url.clone()));
        }
        if config.fetch_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "REMOTE_FETCH_TIMEOUT_MS",
                value: "0".to_string(),
            });
        }
        if config.service_name.trim().is_empty() {
            return Err(ConfigError::MissingValue("service_name"));
        }

        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

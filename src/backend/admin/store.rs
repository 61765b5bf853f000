/**
 * Admin Seed Store
 *
 * Serves and persists the mappings the config resolver consumes as its
 * remote source: `flags.json` and `app-settings.json` in the seeds
 * directory.
 *
 * Reads are total (missing or malformed files read as empty). Writes go to a
 * temporary file that is then renamed over the target, serialized through a
 * single lock so concurrent PUTs cannot interleave.
 */

use std::path::PathBuf;
use std::sync::Arc;

use serde_json::{Map, Value};
use tokio::sync::Mutex;

use crate::backend::error::BackendError;
use crate::shared::{FeatureFlags, PlatformConfig, SharedError};

pub const FLAGS_FILE: &str = "flags.json";
pub const APP_SETTINGS_FILE: &str = "app-settings.json";

#[derive(Debug, Clone)]
pub struct SeedStore {
    config: Arc<PlatformConfig>,
    write_lock: Arc<Mutex<()>>,
}

impl SeedStore {
    pub fn new(config: Arc<PlatformConfig>) -> Self {
        Self {
            config,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Stored flag mapping; non-boolean entries are dropped
    pub async fn read_flags(&self) -> FeatureFlags {
        let mut flags = FeatureFlags::default();
        flags.overlay(&self.read_object(FLAGS_FILE).await);
        flags
    }

    /// Validate and persist a flag mapping, replacing the stored one
    pub async fn write_flags(&self, payload: &Value) -> Result<FeatureFlags, BackendError> {
        let flags = flags_from_payload(payload)?;
        let contents = serde_json::to_vec_pretty(&flags)?;

        let _guard = self.write_lock.lock().await;
        self.write_atomic(FLAGS_FILE, &contents).await?;

        tracing::info!("Stored {} admin flags", flags.len());
        Ok(flags)
    }

    /// Stored app settings mapping, as-is
    pub async fn read_app_settings(&self) -> Map<String, Value> {
        self.read_object(APP_SETTINGS_FILE).await
    }

    async fn read_object(&self, name: &str) -> Map<String, Value> {
        let path = self.config.seed_path(name);
        let contents = match tokio::fs::read(&path).await {
            Ok(contents) => contents,
            Err(err) => {
                tracing::debug!("Admin seed {} unavailable: {}", path.display(), err);
                return Map::new();
            }
        };

        match serde_json::from_slice::<Value>(&contents) {
            Ok(Value::Object(map)) => map,
            Ok(_) => {
                tracing::warn!("Admin seed {} is not a JSON object", path.display());
                Map::new()
            }
            Err(err) => {
                tracing::warn!("Admin seed {} is not valid JSON: {}", path.display(), err);
                Map::new()
            }
        }
    }

    async fn write_atomic(&self, name: &str, contents: &[u8]) -> Result<(), BackendError> {
        let target = self.config.seed_path(name);
        let staging = PathBuf::from(format!("{}.tmp", target.display()));
        let storage = |action: &str, err: std::io::Error| {
            BackendError::storage(format!("Failed to {} {}: {}", action, target.display(), err))
        };

        tokio::fs::create_dir_all(&self.config.seeds_dir)
            .await
            .map_err(|e| storage("prepare directory for", e))?;
        tokio::fs::write(&staging, contents)
            .await
            .map_err(|e| storage("write", e))?;
        tokio::fs::rename(&staging, &target)
            .await
            .map_err(|e| storage("replace", e))?;

        Ok(())
    }
}

/// A flag payload must be a JSON object whose values are all booleans
pub fn flags_from_payload(payload: &Value) -> Result<FeatureFlags, SharedError> {
    let map = payload
        .as_object()
        .ok_or_else(|| SharedError::validation("flags", "expected a JSON object"))?;

    map.iter()
        .map(|(key, value)| match value.as_bool() {
            Some(enabled) => Ok((key.clone(), enabled)),
            None => Err(SharedError::validation(key.clone(), "expected a boolean")),
        })
        .collect()
}

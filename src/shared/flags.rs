//! Feature Flags
//!
//! The effective flag mapping consumed by rendering code. A `FeatureFlags`
//! value built through [`FeatureFlags::baseline`] or
//! [`FeatureFlags::from_env_spec`] always contains every key listed in the
//! module registry; overlays only ever add or overwrite keys.
//!
//! # Environment format
//!
//! `NEXT_PUBLIC_FLAGS` holds comma-separated `key:value` pairs where a value
//! of `1` means enabled and anything else means disabled:
//!
//! ```rust
//! use droobi::shared::flags::FeatureFlags;
//!
//! let flags = FeatureFlags::from_env_spec("lexicon:1,directory:0");
//! assert!(flags.is_enabled("lexicon"));
//! assert!(!flags.is_enabled("directory"));
//! assert!(!flags.is_enabled("tv"));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::shared::modules::flag_keys;

/// Mapping from flag key to enabled state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureFlags(BTreeMap<String, bool>);

impl FeatureFlags {
    /// Every known flag, disabled
    pub fn baseline() -> Self {
        Self(flag_keys().map(|key| (key.to_string(), false)).collect())
    }

    /// Baseline overlaid with the pairs parsed from `raw`
    pub fn from_env_spec(raw: &str) -> Self {
        let mut flags = Self::baseline();
        for (key, enabled) in parse_flag_pairs(raw) {
            flags.set(key, enabled);
        }
        flags
    }

    /// Whether `key` is present and enabled
    pub fn is_enabled(&self, key: &str) -> bool {
        self.0.get(key).copied().unwrap_or(false)
    }

    /// Set a single flag
    pub fn set(&mut self, key: impl Into<String>, enabled: bool) {
        self.0.insert(key.into(), enabled);
    }

    /// Shallow-merge a remote mapping over these flags.
    ///
    /// Remote keys win. Values that are not booleans are skipped. Returns the
    /// number of keys applied.
    pub fn overlay(&mut self, remote: &Map<String, Value>) -> usize {
        let mut applied = 0;
        for (key, value) in remote {
            match value.as_bool() {
                Some(enabled) => {
                    self.set(key.clone(), enabled);
                    applied += 1;
                }
                None => tracing::debug!("Ignoring non-boolean remote flag '{}': {}", key, value),
            }
        }
        applied
    }

    /// Number of keys in the mapping
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no key is present
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(key, enabled)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(key, enabled)| (key.as_str(), *enabled))
    }
}

impl FromIterator<(String, bool)> for FeatureFlags {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Parse `key:value` pairs; `value == "1"` is true. Blank entries and
/// entries with an empty key are skipped, a key without a value is false.
pub fn parse_flag_pairs(raw: &str) -> impl Iterator<Item = (String, bool)> + '_ {
    raw.split(',').filter_map(|pair| {
        let pair = pair.trim();
        if pair.is_empty() {
            return None;
        }
        let (key, value) = pair.split_once(':').unwrap_or((pair, ""));
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        Some((key.to_string(), value.trim() == "1"))
    })
}

//! Status Report Types
//!
//! Wire shapes returned by the status, version and readiness endpoints.
//! Field names are camelCase to match the admin dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::flags::FeatureFlags;

/// Point-in-time operational snapshot served at `/admin/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub service: String,
    pub version: String,
    /// Build commit, empty when unknown
    pub sha: String,
    /// Runtime identifier (the toolchain that built the server)
    pub node: String,
    pub pid: u32,
    /// Time spent assembling this report, not process uptime
    pub uptime_sec: u64,
    pub env_name: String,
    pub data_ns: String,
    pub health: Health,
    /// Remote flags; empty unless remote flags are enabled
    pub flags: FeatureFlags,
    pub counts: ContentCounts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub ready: bool,
}

impl Health {
    pub fn from_ready(ready: bool) -> Self {
        let status = if ready { "ok" } else { "degraded" };
        Self {
            status: status.to_string(),
            ready,
        }
    }
}

/// Record counts per content domain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentCounts {
    pub lexicon: u64,
    pub directory: u64,
    pub webinars: u64,
    pub videos: u64,
    pub trainings: u64,
    pub projects: u64,
    pub community_posts: u64,
}

/// Build identity served at `/version`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub service: String,
    pub version: String,
    pub sha: String,
    pub node: String,
}

/// Body of `/ready`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Readiness {
    pub ready: bool,
    pub checked_at: DateTime<Utc>,
}

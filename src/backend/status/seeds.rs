//! Seed file reads
//!
//! Both helpers are total: a missing file, an I/O error or malformed JSON
//! turn into `false` / `0`.

use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;

/// Seed read by the readiness probe
pub const READINESS_SEED: &str = "terms.json";

pub const TERMS_SEED: &str = "terms.json";
pub const ORGANIZATIONS_SEED: &str = "organizations.json";
pub const WEBINARS_SEED: &str = "webinars.json";
pub const VIDEOS_SEED: &str = "videos.json";
pub const TRAININGS_SEED: &str = "trainings.json";
pub const PROJECTS_SEED: &str = "projects.json";
pub const COMMUNITY_POSTS_SEED: &str = "community-posts.json";

/// True only when `path` exists and reads as UTF-8 text
pub async fn check_readiness(path: &Path) -> bool {
    match tokio::fs::read_to_string(path).await {
        Ok(_) => true,
        Err(err) => {
            tracing::debug!("Readiness seed {} unavailable: {}", path.display(), err);
            false
        }
    }
}

/// Number of elements in the JSON array stored at `path`; 0 for anything else
pub async fn count_records(path: &Path) -> u64 {
    let contents = match tokio::fs::read(path).await {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => return 0,
        Err(err) => {
            tracing::warn!("Failed to read seed {}: {}", path.display(), err);
            return 0;
        }
    };

    match serde_json::from_slice::<Value>(&contents) {
        Ok(Value::Array(items)) => items.len() as u64,
        Ok(_) => {
            tracing::debug!("Seed {} is not a JSON array", path.display());
            0
        }
        Err(err) => {
            tracing::warn!("Seed {} is not valid JSON: {}", path.display(), err);
            0
        }
    }
}

//! Package manifest version lookup
//!
//! Reads the version from a `Cargo.toml` (`[package].version`, or
//! `[workspace.package].version`) or, for `.json` files, from a
//! `package.json`-style top-level `version`. Any failure yields
//! [`DEFAULT_VERSION`].

use std::path::Path;

use thiserror::Error;

/// Version compiled into this binary
pub const DEFAULT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Error)]
enum ManifestError {
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no version string")]
    MissingVersion,
}

/// Version declared by the manifest at `path`, or [`DEFAULT_VERSION`]
pub async fn read_version(path: &Path) -> String {
    match try_read_version(path).await {
        Ok(version) => version,
        Err(err) => {
            tracing::debug!(
                "Using built-in version {}, manifest {} unusable: {}",
                DEFAULT_VERSION,
                path.display(),
                err
            );
            DEFAULT_VERSION.to_string()
        }
    }
}

async fn try_read_version(path: &Path) -> Result<String, ManifestError> {
    let contents = tokio::fs::read_to_string(path).await?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let version = if is_json {
        let manifest: serde_json::Value = serde_json::from_str(&contents)?;
        manifest
            .get("version")
            .and_then(|v| v.as_str())
            .map(str::to_string)
    } else {
        let manifest: toml::Table = toml::from_str(&contents)?;
        ["package", "workspace"]
            .iter()
            .find_map(|section| {
                let table = manifest.get(*section)?;
                let table = if *section == "workspace" { table.get("package")? } else { table };
                table.get("version")?.as_str().map(str::to_string)
            })
    };

    version
        .filter(|v| !v.trim().is_empty())
        .ok_or(ManifestError::MissingVersion)
}

/**
 * Status Aggregator
 *
 * Assembles the `/admin/status` snapshot from the seed files, the package
 * manifest, the optional remote flags and the environment identifiers.
 *
 * Every input fails closed (0, empty mapping, built-in version), so
 * `get_status` always returns a complete report. The seven counts are read
 * concurrently and joined; they may observe different file-system states if
 * seeds are being rewritten at the same time.
 */

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::backend::resolver::ConfigResolver;
use crate::backend::status::manifest::read_version;
use crate::backend::status::seeds::{
    self, COMMUNITY_POSTS_SEED, ORGANIZATIONS_SEED, PROJECTS_SEED, READINESS_SEED, TERMS_SEED,
    TRAININGS_SEED, VIDEOS_SEED, WEBINARS_SEED,
};
use crate::shared::{ContentCounts, FeatureFlags, Health, PlatformConfig, StatusReport, VersionInfo};

/// Runtime identifier recorded at build time
pub const RUNTIME_ID: &str = env!("DROOBI_RUNTIME");

#[derive(Debug, Clone)]
pub struct StatusAggregator {
    config: Arc<PlatformConfig>,
    resolver: ConfigResolver,
}

impl StatusAggregator {
    pub fn new(config: Arc<PlatformConfig>, resolver: ConfigResolver) -> Self {
        Self { config, resolver }
    }

    /// Whether the readiness seed exists and reads as text
    pub async fn check_readiness(&self) -> bool {
        seeds::check_readiness(&self.config.seed_path(READINESS_SEED)).await
    }

    /// Record count of a seed file, relative to the seeds directory
    pub async fn count_records(&self, path: impl AsRef<Path>) -> u64 {
        seeds::count_records(&self.config.seeds_dir.join(path)).await
    }

    /// Counts for every content domain
    pub async fn counts(&self) -> ContentCounts {
        let (lexicon, directory, webinars, videos, trainings, projects, community_posts) = futures_util::join!(
            self.count_records(TERMS_SEED),
            self.count_records(ORGANIZATIONS_SEED),
            self.count_records(WEBINARS_SEED),
            self.count_records(VIDEOS_SEED),
            self.count_records(TRAININGS_SEED),
            self.count_records(PROJECTS_SEED),
            self.count_records(COMMUNITY_POSTS_SEED),
        );

        ContentCounts {
            lexicon,
            directory,
            webinars,
            videos,
            trainings,
            projects,
            community_posts,
        }
    }

    /// Full operational snapshot.
    ///
    /// `uptime_sec` is the time spent building this report, not the time
    /// since the process started.
    pub async fn get_status(&self) -> StatusReport {
        let started = Instant::now();

        let counts = self.counts().await;
        let version = read_version(&self.config.manifest_path).await;
        let flags = if self.config.remote_flags {
            self.resolver.remote_flags().await
        } else {
            FeatureFlags::default()
        };
        let ready = self.check_readiness().await;

        tracing::debug!(
            "Status assembled in {:?} (ready: {}, lexicon: {})",
            started.elapsed(),
            ready,
            counts.lexicon
        );

        StatusReport {
            service: self.config.service_name.clone(),
            version,
            sha: self.config.build_sha.clone(),
            node: RUNTIME_ID.to_string(),
            pid: std::process::id(),
            uptime_sec: started.elapsed().as_secs(),
            env_name: self.config.env_name.clone(),
            data_ns: self.config.data_namespace.clone(),
            health: Health::from_ready(ready),
            flags,
            counts,
        }
    }

    /// Build identity for `/version`
    pub async fn version_info(&self) -> VersionInfo {
        VersionInfo {
            service: self.config.service_name.clone(),
            version: read_version(&self.config.manifest_path).await,
            sha: self.config.build_sha.clone(),
            node: RUNTIME_ID.to_string(),
        }
    }
}

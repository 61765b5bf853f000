//! Status Module
//!
//! Health, version and content-count reporting for the admin dashboard and
//! the readiness probe.
//!
//! # Module Structure
//!
//! ```text
//! status/
//! ├── mod.rs        - Module exports and documentation
//! ├── aggregator.rs - StatusAggregator (readiness, counts, full report)
//! ├── seeds.rs      - Seed file names and total read helpers
//! ├── manifest.rs   - Package manifest version lookup
//! └── handlers.rs   - /ready, /admin/status, /version
//! ```
//!
//! # Seeds Layout
//!
//! | domain           | file                   |
//! |------------------|------------------------|
//! | `lexicon`        | `terms.json`           |
//! | `directory`      | `organizations.json`   |
//! | `webinars`       | `webinars.json`        |
//! | `videos`         | `videos.json`          |
//! | `trainings`      | `trainings.json`       |
//! | `projects`       | `projects.json`        |
//! | `communityPosts` | `community-posts.json` |

/// Status aggregation
pub mod aggregator;

/// Seed file helpers
pub mod seeds;

/// Manifest version lookup
pub mod manifest;

/// HTTP handlers
pub mod handlers;

pub use aggregator::StatusAggregator;

//! Shared Module
//!
//! Types shared by the server and by any rendering code linking the library:
//! the module registry, effective configuration types, status wire shapes
//! and the platform configuration read from the environment.
//!
//! Nothing in here performs I/O; fetching and file reads live in `backend`.

/// Module registry constants
pub mod modules;

/// Feature flag mapping
pub mod flags;

/// Branding and contact settings
pub mod settings;

/// Status, version and readiness wire types
pub mod status;

/// Shared error types
pub mod error;

/// Platform configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{ConfigError, PlatformConfig, PlatformConfigBuilder, SERVICE_NAME};
pub use error::SharedError;
pub use flags::FeatureFlags;
pub use modules::{enabled_modules, ModuleInfo, MODULES};
pub use settings::{AppSettings, FooterLink, SocialLinks};
pub use status::{ContentCounts, Health, Readiness, StatusReport, VersionInfo};

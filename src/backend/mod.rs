//! Backend Module
//!
//! Server-side code: config resolution, status aggregation, the seed-backed
//! admin API and the Axum server that exposes them.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs     - Module exports and documentation
//! ├── server/    - Configuration loading, state, app creation
//! ├── routes/    - Route configuration
//! ├── resolver/  - Effective flags and settings
//! ├── status/    - Readiness, status report, version
//! ├── admin/     - Seed-backed flags and settings store
//! └── error/     - Error types
//! ```
//!
//! # Endpoints
//!
//! - `GET /ready` - 200 when the readiness seed is readable, 503 otherwise
//! - `GET /admin/status` - Status report
//! - `GET /version` - Service, version, build SHA, runtime
//! - `GET /flags`, `GET /app-settings`, `GET /modules` - Effective configuration
//! - `GET|PUT /admin/flags`, `GET /public/app-settings` - Admin store
//!
//! # State Management
//!
//! `AppState` is built once at startup and never mutated; every component
//! holds the same `Arc<PlatformConfig>`. There are no locks on the request
//! path apart from the seed store's write lock.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Effective configuration resolution
pub mod resolver;

/// Status aggregation
pub mod status;

/// Seed-backed admin API
pub mod admin;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use server::create_app;
pub use resolver::ConfigResolver;
pub use status::StatusAggregator;
pub use admin::SeedStore;
pub use error::BackendError;

//! Route Configuration Module
//!
//! Configures all HTTP routes for the backend server, grouped by concern.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs           - Module exports and documentation
//! ├── router.rs        - Main router creation
//! ├── status_routes.rs - Readiness, status and version
//! ├── config_routes.rs - Effective flags, settings and modules
//! └── admin_routes.rs  - Seed-backed admin API
//! ```

/// Main router creation
pub mod router;

/// Status routes
pub mod status_routes;

/// Effective configuration routes
pub mod config_routes;

/// Admin API routes
pub mod admin_routes;

pub use router::create_router;

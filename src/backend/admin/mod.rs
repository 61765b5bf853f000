//! Admin Module
//!
//! Seed-file backed admin API: the flag mapping (`GET`/`PUT /admin/flags`)
//! and the public settings mapping (`GET /public/app-settings`). These are
//! the endpoints the config resolver fetches when remote overrides are
//! enabled.

/// Seed store for flags and settings
pub mod store;

/// HTTP handlers
pub mod handlers;

pub use store::SeedStore;

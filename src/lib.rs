//! Droobi - Platform Backend Library
//!
//! Droobi presents a directory of content modules (lexicon, directory,
//! lounge, TV, projects, ...) gated behind feature flags. This library holds
//! the backend pieces with actual logic in them:
//!
//! - **Config resolution**: environment-derived feature flags and branding
//!   settings, optionally overridden by a remote admin endpoint. Resolution
//!   always degrades to the environment defaults.
//! - **Status aggregation**: a health/version report built from the JSON
//!   seed files and the package manifest, plus a readiness probe.
//!
//! # Module Structure
//!
//! - **`shared`** - Platform-agnostic types
//!   - Module registry, feature flags, app settings
//!   - Status report wire shapes
//!   - Platform configuration and error types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Config resolver with bounded-timeout remote fetches
//!   - Status aggregator over seed files
//!   - Seed-backed admin store for flags and app settings
//!   - Axum routes, application state and error responses
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and the server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use droobi::backend::server::init::create_app;
//! use droobi::shared::PlatformConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PlatformConfig::from_env()?;
//! let app = create_app(config)?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:4000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - The resolver and the aggregator are total: every failure is logged and
//!   replaced by a safe default
//! - Configuration errors surface at startup as `shared::ConfigError`
//! - HTTP-facing errors are `backend::error::BackendError`

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

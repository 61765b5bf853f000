//! Server Module
//!
//! Server initialization and configuration.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports and documentation
//! ├── state.rs  - AppState and FromRef implementations
//! ├── config.rs - Environment configuration and HTTP client
//! └── init.rs   - App creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `load_platform_config` reads the environment
//! 2. **State Creation**: resolver, aggregator and seed store share one config
//! 3. **Router Creation**: all routes plus request tracing

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use state::AppState;
pub use init::create_app;

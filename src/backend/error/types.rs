/**
 * Backend Error Types
 *
 * Errors raised by the HTTP layer and by server startup. The config resolver
 * and the status aggregator never produce these: they absorb their own
 * failures and fall back to defaults.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Invalid request payloads, e.g. a flag mapping with non-boolean values.
 *
 * ## Storage Errors
 *
 * Failures writing the admin seed files.
 *
 * ## Startup Errors
 *
 * Invalid configuration or an HTTP client that cannot be built.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::{ConfigError, SharedError};

/// Backend-specific error types
///
/// Each variant maps to an HTTP status code and can be returned directly
/// from a handler.
///
/// # Usage
///
/// ```rust
/// use droobi::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid request");
/// let err = BackendError::storage("Failed to write flags.json");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., invalid request body)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Seed store read/write failure
    #[error("Storage error: {message}")]
    StorageError {
        /// Human-readable error message
        message: String,
    },

    /// Server could not be assembled
    #[error("Startup error: {message}")]
    StartupError {
        /// Human-readable error message
        message: String,
    },

    /// Invalid platform configuration
    #[error(transparent)]
    ConfigError(#[from] ConfigError),

    /// Shared error (validation or serialization of shared types)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::StorageError {
            message: message.into(),
        }
    }

    /// Create a new startup error
    pub fn startup(message: impl Into<String>) -> Self {
        Self::StartupError {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `SharedError::ValidationError` - 400 Bad Request
    /// - Everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::SharedError(SharedError::ValidationError { .. }) => StatusCode::BAD_REQUEST,
            Self::SharedError(SharedError::SerializationError { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::StorageError { .. }
            | Self::StartupError { .. }
            | Self::ConfigError(_)
            | Self::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::StorageError { message } => message.clone(),
            Self::StartupError { message } => message.clone(),
            Self::ConfigError(err) => err.to_string(),
            Self::SharedError(err) => err.to_string(),
            Self::SerializationError(err) => err.to_string(),
        }
    }
}

//! Error types for the content analysis service.
//!
//! `AppError` covers the operational failures this process can hit; the
//! analysis pipeline itself never surfaces errors to callers (see the
//! canned payloads in `domain::models`).

use thiserror::Error;

/// Domain-specific errors for application operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid process configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Network request failed
    #[error("Network error: {0}")]
    NetworkError(String),

    /// External service error (inference API)
    #[error("Service error ({service}): {message}")]
    ServiceError { service: &'static str, message: String },

    /// Generic error with context
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::NetworkError(msg.into())
    }

    /// Create a service error
    pub fn service(service: &'static str, msg: impl Into<String>) -> Self {
        Self::ServiceError {
            service,
            message: msg.into(),
        }
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;

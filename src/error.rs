//! Error types for templist operations.
//!
//! This module defines [`TemplistError`], the error type returned by every
//! fallible operation that can abort a run, and a [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! - Repository list failures are fatal and surface as `TemplistError`
//! - Per-repository failures use [`FetchError`](crate::registry::FetchError)
//!   and never escape the catalog
//! - Use `anyhow::Error` (via `TemplistError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for templist operations.
#[derive(Debug, Error)]
pub enum TemplistError {
    /// Repository list file does not exist.
    #[error("Repository list not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Repository list file exists but could not be read.
    #[error("Failed to read repository list at {path}: {source}")]
    ConfigReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Repository list file is not a JSON array of repositories.
    #[error("Failed to parse repository list at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TemplistError {
    /// Whether this error came from reading the repository list.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. } | Self::ConfigReadError { .. } | Self::ConfigParseError { .. }
        )
    }
}

/// Result type alias for templist operations.
pub type Result<T> = std::result::Result<T, TemplistError>;

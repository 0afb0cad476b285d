//! # Error Types
//!
//! Structured error types for landscape_core. The estimator itself never
//! fails (bad dimensions collapse to zero), so these errors come from the
//! edges: parsing categorical keys, reading configuration documents and
//! fetching the remote override.
//!
//! ## Example
//!
//! ```rust
//! use landscape_core::errors::{LandscapeError, LandscapeResult};
//!
//! fn check_rate(rate: f64) -> LandscapeResult<()> {
//!     if !rate.is_finite() || rate < 0.0 {
//!         return Err(LandscapeError::invalid_rate(
//!             "pricing.overheadRate",
//!             rate.to_string(),
//!             "Rate must be a non-negative number",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for landscape_core operations
pub type LandscapeResult<T> = Result<T, LandscapeError>;

/// Structured error type for estimator, configuration and link operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum LandscapeError {
    /// A categorical key (project, tier, access, waste) is not recognised
    #[error("Unknown {category} '{key}' (expected one of: {expected})")]
    UnknownKey {
        category: String,
        key: String,
        expected: String,
    },

    /// A configured rate, multiplier or floor is out of range
    #[error("Invalid rate '{field}': {value} - {reason}")]
    InvalidRate {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Remote configuration could not be fetched
    #[error("Fetch error: {url} - {reason}")]
    FetchError { url: String, reason: String },
}

impl LandscapeError {
    /// Create an UnknownKey error listing the accepted keys
    pub fn unknown_key(category: impl Into<String>, key: impl Into<String>, expected: &[&str]) -> Self {
        LandscapeError::UnknownKey {
            category: category.into(),
            key: key.into(),
            expected: expected.join(", "),
        }
    }

    /// Create an InvalidRate error
    pub fn invalid_rate(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        LandscapeError::InvalidRate {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        LandscapeError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        LandscapeError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Create a FetchError
    pub fn fetch_error(url: impl Into<String>, reason: impl Into<String>) -> Self {
        LandscapeError::FetchError {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Errors after which the built-in defaults are a usable fallback.
    ///
    /// Configuration problems never stop an estimate from being shown.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            LandscapeError::FileError { .. }
                | LandscapeError::SerializationError { .. }
                | LandscapeError::FetchError { .. }
                | LandscapeError::InvalidRate { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            LandscapeError::UnknownKey { .. } => "UNKNOWN_KEY",
            LandscapeError::InvalidRate { .. } => "INVALID_RATE",
            LandscapeError::FileError { .. } => "FILE_ERROR",
            LandscapeError::SerializationError { .. } => "SERIALIZATION_ERROR",
            LandscapeError::FetchError { .. } => "FETCH_ERROR",
        }
    }
}

impl From<serde_json::Error> for LandscapeError {
    fn from(err: serde_json::Error) -> Self {
        LandscapeError::serialization(err.to_string())
    }
}

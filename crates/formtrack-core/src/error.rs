//! Error types for the FormTrack system.
//!
//! This module provides comprehensive error handling using [`thiserror`] for
//! automatic `Display` and `Error` trait implementations.
//!
//! # Error Hierarchy
//!
//! - [`CoreError`]: Top-level error type that encompasses all subsystem errors
//! - [`ProviderError`]: Errors from the external landmark provider
//! - [`StoreError`]: Errors from the external document store
//!
//! # Example
//!
//! ```rust
//! use formtrack_core::error::{CoreError, StoreError};
//!
//! fn write_record() -> Result<(), CoreError> {
//!     // Store write that might fail
//!     Err(StoreError::RequestFailed {
//!         message: "connection refused".to_string(),
//!     }
//!     .into())
//! }
//! ```

use thiserror::Error;

/// A specialized `Result` type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Top-level error type for the FormTrack system.
///
/// This enum encompasses all possible errors that can occur within the core
/// system, providing a unified error type for the entire workspace.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CoreError {
    /// Landmark provider error
    #[error("Landmark provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Document store error
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
    },

    /// Validation error for input data
    #[error("Validation error: {message}")]
    Validation {
        /// Description of what validation failed
        message: String,
    },

    /// A pose array does not carry enough points to cover the tracked landmarks
    #[error("Landmark array too short: need at least {required} points, got {available}")]
    InsufficientLandmarks {
        /// Minimum number of points required
        required: usize,
        /// Points actually supplied
        available: usize,
    },

    /// A landmark index outside the tracked set
    #[error("Unknown landmark index: {index}")]
    UnknownLandmarkIndex {
        /// The unrecognized index
        index: u8,
    },

    /// I/O error from a frame source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates a new validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Returns `true` if this error is recoverable.
    ///
    /// Recoverable errors are transient conditions (network failures, a bad
    /// frame in a stream) where the caller can reasonably continue with the
    /// next frame. Non-recoverable errors indicate invalid configuration or
    /// malformed data that will not improve on retry.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Provider(e) => e.is_recoverable(),
            Self::Store(e) => e.is_recoverable(),
            Self::Io(_) => true,
            Self::Configuration { .. }
            | Self::Validation { .. }
            | Self::InsufficientLandmarks { .. }
            | Self::UnknownLandmarkIndex { .. } => false,
        }
    }
}

/// Errors from the external landmark provider.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ProviderError {
    /// The provider could not be reached or the request failed in transit
    #[error("Provider request failed: {message}")]
    RequestFailed {
        /// Description of the transport failure
        message: String,
    },

    /// The provider answered with a payload that does not decode
    #[error("Invalid provider response: {message}")]
    InvalidResponse {
        /// Description of the decode failure
        message: String,
    },

    /// The provider rejected the submitted image
    #[error("Provider rejected image: {message}")]
    ImageRejected {
        /// Reason given by the provider
        message: String,
    },
}

impl ProviderError {
    /// Returns `true` if this error is recoverable.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::RequestFailed { .. } => true,
            Self::InvalidResponse { .. } | Self::ImageRejected { .. } => false,
        }
    }
}

/// Errors from the external document store.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StoreError {
    /// The store could not be reached or the request failed in transit
    #[error("Store request failed: {message}")]
    RequestFailed {
        /// Description of the transport failure
        message: String,
    },

    /// The store answered with a non-success status
    #[error("Store rejected write (HTTP {status}): {message}")]
    Rejected {
        /// HTTP status code returned by the store
        status: u16,
        /// Response body or status text
        message: String,
    },

    /// A record could not be encoded for the wire
    #[error("Record serialization failed: {message}")]
    Serialization {
        /// Description of the serialization failure
        message: String,
    },
}

impl StoreError {
    /// Returns `true` if this error is recoverable.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::RequestFailed { .. } => true,
            Self::Rejected { status, .. } => *status >= 500,
            Self::Serialization { .. } => false,
        }
    }
}

//! Error types for Bucketeer operations.
//!
//! This module defines [`BucketeerError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `BucketeerError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `BucketeerError::Other`) for unexpected errors
//! - Collaborator failures abort the current command; there is no local recovery

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Bucketeer operations.
#[derive(Debug, Error)]
pub enum BucketeerError {
    /// The Scoop installation directory cannot be read.
    #[error("Scoop store unavailable at {path}: {message}")]
    StoreUnavailable { path: PathBuf, message: String },

    /// The bucket index could not be fetched or parsed.
    #[error("Index unavailable at {url}: {message}")]
    IndexUnavailable { url: String, message: String },

    /// An installed package name does not carry the expected bucket prefix.
    ///
    /// Never aborts a command: malformed records are skipped from the
    /// reconciliation lookup and surfaced as warnings.
    #[error("Malformed package record '{name}': {message}")]
    MalformedRecord { name: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Bucketeer operations.
pub type Result<T> = std::result::Result<T, BucketeerError>;

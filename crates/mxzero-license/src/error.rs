//! Error types for key artifact verification.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that keep the gate locked.
///
/// None of these reach the audio thread: [`LicenseValidator::validate`]
/// logs them and reports [`ValidationOutcome::Failed`].
///
/// [`LicenseValidator::validate`]: crate::LicenseValidator::validate
/// [`ValidationOutcome::Failed`]: crate::ValidationOutcome::Failed
#[derive(Debug, Error)]
pub enum LicenseError {
    /// The platform has no per-user data directory
    #[error("no per-user data directory for the key artifact")]
    NoKeyLocation,

    /// Failed to create the key artifact's parent directory
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create the empty key artifact
    #[error("failed to create key file '{path}': {source}")]
    CreateKey {
        /// Key artifact path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to read the key artifact
    #[error("failed to read key file '{path}': {source}")]
    ReadKey {
        /// Key artifact path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Key artifact exceeds the size limit
    #[error("key file '{path}' is {len} bytes, limit is {limit}")]
    KeyTooLarge {
        /// Key artifact path.
        path: PathBuf,
        /// Actual size in bytes.
        len: u64,
        /// Maximum accepted size in bytes.
        limit: u64,
    },

    /// A reference digest is not 128 hex characters
    #[error("invalid reference digest: {0}")]
    InvalidDigest(#[from] hex::FromHexError),
}

impl LicenseError {
    /// Create a create directory error.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LicenseError::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Create a create key error.
    pub fn create_key(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LicenseError::CreateKey {
            path: path.into(),
            source,
        }
    }

    /// Create a read key error.
    pub fn read_key(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LicenseError::ReadKey {
            path: path.into(),
            source,
        }
    }
}

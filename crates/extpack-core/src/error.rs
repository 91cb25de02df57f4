//! Error types for extension packaging operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `PackError`.
pub type Result<T> = std::result::Result<T, PackError>;

/// Errors that can occur while packaging an extension.
#[derive(Error, Debug)]
pub enum PackError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The manifest does not exist in the packaging root.
    #[error("manifest not found: {path}")]
    ManifestNotFound {
        /// Expected manifest location.
        path: PathBuf,
    },

    /// The manifest exists but could not be read.
    #[error("cannot read manifest {path}: {source}")]
    ManifestRead {
        /// Manifest location.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The manifest is not a valid JSON document.
    #[error("cannot parse manifest {path}: {source}")]
    ManifestParse {
        /// Manifest location.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// The manifest has no usable `version` field.
    #[error("manifest {path} has no version field")]
    MissingVersion {
        /// Manifest location.
        path: PathBuf,
    },

    /// The zip container could not be written or read back.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// Invalid compression level specified.
    #[error("invalid compression level {level}, must be 1-9")]
    InvalidCompressionLevel {
        /// The invalid compression level.
        level: u8,
    },

    /// Directory traversal failed.
    #[error("cannot walk {path}: {reason}")]
    Walk {
        /// Path being walked when the failure occurred.
        path: PathBuf,
        /// Reason reported by the walker.
        reason: String,
    },
}

impl PackError {
    /// Returns `true` if this error is caused by a missing or unusable
    /// manifest.
    #[must_use]
    pub const fn is_manifest_error(&self) -> bool {
        matches!(
            self,
            Self::ManifestNotFound { .. }
                | Self::ManifestRead { .. }
                | Self::ManifestParse { .. }
                | Self::MissingVersion { .. }
        )
    }
}

impl From<zip::result::ZipError> for PackError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(io) => Self::Io(io),
            other => Self::InvalidArchive(other.to_string()),
        }
    }
}

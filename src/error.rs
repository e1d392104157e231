//! Error types for cachebust.
//!
//! Fingerprinting itself is total and never fails; these errors cover reading
//! assets, walking asset directories, loading configuration and rendering output.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FingerprintError {
    #[error("Failed to read asset {path:?}: {source}")]
    AssetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk directory {root:?}: {message}")]
    Walk { root: PathBuf, message: String },

    #[error("Not a directory: {0:?}")]
    NotADirectory(PathBuf),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<config::ConfigError> for FingerprintError {
    fn from(err: config::ConfigError) -> Self {
        FingerprintError::ConfigError(err.to_string())
    }
}

//! Storage-specific error type wrapping file and JSON errors.

use std::path::PathBuf;

use itemhub_domain::error::ItemHubError;

/// Errors originating from the JSON file storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading, writing, or renaming the backing file failed.
    #[error("I/O error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file does not hold a JSON array of items, or the
    /// collection could not be encoded.
    #[error("JSON error on {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<StorageError> for ItemHubError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

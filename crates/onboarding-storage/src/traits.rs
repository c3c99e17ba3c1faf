//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must
//! implement. The submission pipeline issues writes through this trait and
//! never reads back or checks existence.

use crate::StorageBackend;
use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// All storage backends (S3, local filesystem) must implement this trait.
/// The handle is stateless configuration and safe to share across requests.
///
/// **Key format:** `{root}/{section}/{file_name}`, derived by
/// [`crate::keys::SubmissionPaths`]. See the crate root documentation.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Write one object at the given key, tagged with the declared content
    /// type. Returns the public URL of the stored object.
    ///
    /// Exactly one write per call; any failure propagates to the caller and
    /// already-written objects are never rolled back.
    async fn put_object(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> StorageResult<String>;

    /// Public URL of a key prefix (used for the submission root folder in the
    /// success response).
    fn folder_url(&self, prefix: &str) -> String;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}

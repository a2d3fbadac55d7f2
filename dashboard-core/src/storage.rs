use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

pub mod s3;

pub use s3::S3Storage;

/// Recoverable storage-layer failure.
///
/// Like fetch errors, these are logged and recorded per city; they never
/// abort a run.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The bucket existence check failed for a reason other than "absent".
    #[error("failed to check bucket {bucket}: {message}")]
    Head { bucket: String, message: String },
    /// Bucket creation failed.
    #[error("failed to create bucket {bucket}: {message}")]
    Create { bucket: String, message: String },
    /// Writing one object failed.
    #[error("failed to write object {key}: {message}")]
    Put { key: String, message: String },
    /// The archived record could not be serialized.
    #[error("failed to serialize archived record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Bucket-scoped object store the dashboard archives into.
///
/// The production implementation talks to S3; tests substitute an
/// in-memory store.
#[async_trait]
pub trait ObjectStorage: Send + Sync + Debug {
    /// The bucket this store writes into.
    fn bucket(&self) -> &str;

    /// Whether the bucket currently exists.
    ///
    /// `Ok(false)` is a clean "absent" answer, not a failure.
    async fn bucket_exists(&self) -> Result<bool, StorageError>;

    /// Create the bucket.
    async fn create_bucket(&self) -> Result<(), StorageError>;

    /// Write one object under `key`.
    async fn put_object(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError>;
}

//! Storage error types.

use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store rejected the operation (quota exceeded, disabled
    /// storage, poisoned lock).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// A persisted payload failed to decode.
    #[error("Stored data is corrupt: {0}")]
    Corrupt(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

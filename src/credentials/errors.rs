//! Credential store error types.

use crate::storage::StorageError;
use thiserror::Error;

/// Credential store errors
#[derive(Debug, Error)]
pub enum CredentialError {
    /// Username already exists (case-sensitive match)
    #[error("Username already exists")]
    DuplicateUsername,

    /// Password scored below the acceptance threshold
    #[error("Password too weak: {0}")]
    WeakPassword(String),

    /// The persistence layer failed
    #[error("Cannot save account data")]
    Storage(#[from] StorageError),

    /// Salting or hashing the password failed
    #[error("Cannot process password")]
    Hashing(#[from] crate::password::PasswordError),
}

/// Result type for credential store operations
pub type CredentialResult<T> = Result<T, CredentialError>;

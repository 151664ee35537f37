//! Password hashing error types.

use thiserror::Error;

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordError {
    /// Key derivation failed
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    /// The supplied salt is not a valid encoded salt
    #[error("Invalid salt: {0}")]
    InvalidSalt(String),
}

/// Result type for password hashing operations
pub type PasswordResult<T> = Result<T, PasswordError>;

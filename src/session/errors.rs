//! Session error types.

use crate::storage::StorageError;
use thiserror::Error;

/// Session errors
///
/// Only session creation can fail; checks and clears degrade gracefully
/// instead of erroring, since an absent session is a normal state.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The persistence layer failed
    #[error("Cannot save session data")]
    Storage(#[from] StorageError),
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

//! Authentication error types.

use crate::credentials::CredentialError;
use crate::storage::StorageError;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Authentication errors
///
/// Every variant carries a message suitable for direct display. Failures
/// that reveal account existence all share the "Invalid credentials"
/// headline; only lockout and suspension are distinguishable, which the UI
/// needs to explain why a correct password is being refused.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown username or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Wrong password for an existing account, with the running attempt
    /// count so the UI can warn before lockout
    #[error("Invalid credentials ({attempts}/{limit} attempts)")]
    InvalidPassword { attempts: u32, limit: u32 },

    /// The attempt limit was reached just now
    #[error("Account locked for {minutes} minutes due to repeated failed attempts")]
    LockoutTriggered { minutes: i64 },

    /// The account is inside an earlier lockout window
    #[error("Account temporarily locked. Please try again later")]
    AccountLocked { until: DateTime<Utc> },

    /// The account is suspended
    #[error("Account is suspended")]
    AccountSuspended,

    /// The persistence layer failed
    #[error("Unable to access account data")]
    Storage(#[from] StorageError),
}

impl From<CredentialError> for AuthError {
    fn from(e: CredentialError) -> Self {
        match e {
            CredentialError::Storage(e) => AuthError::Storage(e),
            other => AuthError::Storage(StorageError::Unavailable(other.to_string())),
        }
    }
}

impl AuthError {
    /// Whether this failure is a lockout, for UI treatment
    pub fn is_lockout(&self) -> bool {
        matches!(
            self,
            AuthError::LockoutTriggered { .. } | AuthError::AccountLocked { .. }
        )
    }

    /// Client-safe message with internal details stripped
    pub fn client_message(&self) -> String {
        match self {
            // Never expose storage internals
            AuthError::Storage(_) => "Unable to sign in right now".to_string(),
            _ => self.to_string(),
        }
    }
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;

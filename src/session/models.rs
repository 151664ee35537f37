//! Session data models.

use crate::credentials::Role;
use chrono::{DateTime, Utc};

/// A stored session as read back from the storage layer
#[derive(Debug, Clone)]
pub struct Session {
    /// Opaque random token (256 bits, URL-safe Base64)
    pub token: String,
    /// Username copied from the user record at creation time
    pub username: String,
    /// Role copied at creation time; not re-resolved on later checks
    pub role: Role,
    /// Absolute expiry
    pub expires_at: DateTime<Utc>,
    /// Last qualifying user activity
    pub last_activity: DateTime<Utc>,
}

/// Observable session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No session is stored
    NoSession,
    /// Session is valid and recently active
    Active,
    /// Session is valid but close to idle expiry; a warning has been issued
    IdleWarning,
    /// Session passed its timeout and has been force-cleared
    Expired,
}

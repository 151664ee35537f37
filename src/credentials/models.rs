//! Credential data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// User ID type
pub type UserId = i64;

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Student => write!(f, "student"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "admin" => Ok(Role::Admin),
            _ => Err(()),
        }
    }
}

/// Account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Suspended,
}

/// Full user record as persisted in the `users` list
///
/// `password_hash` and `salt` never leave the crate; public callers see
/// [`UserProfile`] instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub username: String,
    pub role: Role,
    pub status: AccountStatus,
    pub password_hash: String,
    pub salt: String,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
    /// Consecutive failed authentications since the last success
    pub login_attempts: u32,
    /// When set and in the future, authentication is refused outright
    pub locked_until: Option<DateTime<Utc>>,
}

impl UserRecord {
    /// Public view of the record with secret fields stripped
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            username: self.username.clone(),
            role: self.role,
            status: self.status,
            last_login: self.last_login,
        }
    }
}

/// User record sans secret fields, safe to hand to UI code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub username: String,
    pub role: Role,
    pub status: AccountStatus,
    pub last_login: Option<DateTime<Utc>>,
}

/// Partial update merged into an existing record
///
/// `None` fields are left untouched. `locked_until` is doubly optional so
/// an update can distinguish "leave as is" from "clear the lock".
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub status: Option<AccountStatus>,
    pub last_login: Option<DateTime<Utc>>,
    pub login_attempts: Option<u32>,
    pub locked_until: Option<Option<DateTime<Utc>>>,
}

//! Authentication data models.

use crate::credentials::UserProfile;
use serde::{Deserialize, Serialize};

/// Successful login payload
///
/// Carries the secret-free profile and the freshly issued session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginSuccess {
    pub user: UserProfile,
    pub token: String,
}

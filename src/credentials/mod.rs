//! Credential store: typed user records over the key-value storage layer.
//!
//! Records are persisted as a JSON list under a single `users` key, the
//! layout the portal has always used. The store owns creation-time
//! validation (duplicate usernames, password strength) and the salted
//! hashing of new passwords; authentication policy lives in [`crate::auth`].

pub mod errors;
pub mod models;
pub mod store;
pub mod strength;

pub use errors::{CredentialError, CredentialResult};
pub use models::{AccountStatus, Role, UserId, UserProfile, UserRecord, UserUpdate};
pub use store::CredentialStore;
pub use strength::{MIN_ACCEPTED_SCORE, password_strength};

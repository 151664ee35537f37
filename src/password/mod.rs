//! Password hashing and verification.
//!
//! Argon2id with a per-user salt. Unlike the browser original there is no
//! weak fallback path: the strong primitive is required unconditionally.

pub mod errors;
pub mod hasher;

pub use errors::{PasswordError, PasswordResult};
pub use hasher::PasswordHasher;

//! Authentication: credential verification and lockout policy.
//!
//! A login attempt looks up the user, checks lockout and suspension,
//! verifies the password, and on success resets the failure bookkeeping
//! and asks the session manager for a session. Five consecutive failures
//! lock the account for fifteen minutes.
//!
//! ## Example
//!
//! ```
//! use portal_auth::auth::{AuthConfig, Authenticator};
//! use portal_auth::clock::SystemClock;
//! use portal_auth::credentials::CredentialStore;
//! use portal_auth::session::{SessionConfig, SessionManager};
//! use portal_auth::storage::MemoryStorage;
//! use std::sync::Arc;
//!
//! let storage = Arc::new(MemoryStorage::new());
//! let clock = Arc::new(SystemClock);
//! let store = CredentialStore::new(storage.clone(), clock.clone());
//! store.seed_defaults().unwrap();
//!
//! let sessions = SessionManager::new(
//!     storage.clone(),
//!     Arc::new(MemoryStorage::new()),
//!     clock.clone(),
//!     SessionConfig::default(),
//! );
//! let auth = Authenticator::new(store, sessions.clone(), clock, AuthConfig::default());
//!
//! let login = auth.login("student", "password123", false).unwrap();
//! assert_eq!(login.user.username, "student");
//! assert!(sessions.has_valid_session());
//! ```

pub mod authenticator;
pub mod config;
pub mod errors;
pub mod models;

pub use authenticator::Authenticator;
pub use config::AuthConfig;
pub use errors::{AuthError, AuthResult};
pub use models::LoginSuccess;

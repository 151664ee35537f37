//! # Portal Auth
//!
//! Authentication and session-security core for a campus portal: salted
//! password hashing, a credential store with a lockout policy, and session
//! token lifecycle with idle timeout.
//!
//! The crate is a library with no runtime of its own. All state persists
//! through the [`storage::Storage`] key-value abstraction, and all time
//! flows through the [`clock::Clock`] trait, so the whole stack runs
//! against in-memory fakes in tests.
//!
//! ## Architecture
//!
//! A login attempt flows through four components:
//!
//! - [`password`]: Argon2id hashing with per-user salts
//! - [`credentials`]: typed user records over the storage layer
//! - [`auth`]: credential verification, attempt counting, lockout
//! - [`session`]: token issuance, validity, idle-timeout state machine
//!
//! The authenticator asks the credential store for the record, the hasher
//! for verification, and on success the session manager for a token.
//! Page-load checks only talk to the session manager.
//!
//! ## Example
//!
//! ```
//! use portal_auth::auth::{AuthConfig, Authenticator};
//! use portal_auth::clock::SystemClock;
//! use portal_auth::credentials::{CredentialStore, Role};
//! use portal_auth::session::{SessionConfig, SessionManager};
//! use portal_auth::storage::MemoryStorage;
//! use std::sync::Arc;
//!
//! let storage = Arc::new(MemoryStorage::new());
//! let clock = Arc::new(SystemClock);
//!
//! let store = CredentialStore::new(storage.clone(), clock.clone());
//! store.create("freshman", "Abcdef12!", Role::Student).unwrap();
//!
//! let sessions = SessionManager::new(
//!     storage,
//!     Arc::new(MemoryStorage::new()),
//!     clock.clone(),
//!     SessionConfig::default(),
//! );
//! let auth = Authenticator::new(store, sessions.clone(), clock, AuthConfig::default());
//!
//! auth.login("freshman", "Abcdef12!", true).unwrap();
//! assert!(sessions.require_role(Role::Student, None));
//! ```

/// Authentication policy: verification, attempt counting, lockout.
pub mod auth;
pub use auth::{AuthConfig, AuthError, Authenticator, LoginSuccess};

/// Injectable time source.
pub mod clock;
pub use clock::{Clock, ManualClock, SystemClock};

/// Typed user records and the credential store.
pub mod credentials;
pub use credentials::{CredentialStore, Role, UserProfile, UserRecord};

/// Password hashing and verification.
pub mod password;
pub use password::PasswordHasher;

/// Session token lifecycle and idle timeout.
pub mod session;
pub use session::{SessionConfig, SessionManager, SessionState};

/// Key-value persistence abstraction.
pub mod storage;
pub use storage::{MemoryStorage, Storage};

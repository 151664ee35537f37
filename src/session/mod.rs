//! Session lifecycle: token issuance, validity, idle timeout.
//!
//! The session manager exclusively owns session state. The authenticator
//! requests creation on a successful login; everything else (activity
//! tracking, idle expiry, role gating, logout) happens here.
//!
//! Two storage scopes implement the "remember me" choice: a persistent
//! scope that survives restarts and an ephemeral scope that does not.
//! At most one scope holds a session at a time.

pub mod config;
pub mod errors;
pub mod hooks;
pub mod manager;
pub mod models;

pub use config::SessionConfig;
pub use errors::{SessionError, SessionResult};
pub use hooks::{LogNavigator, LogNotifier, LoginNavigator, SessionNotifier};
pub use manager::SessionManager;
pub use models::{Session, SessionState};

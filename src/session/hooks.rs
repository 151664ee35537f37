//! Collaborator hooks for UI feedback and navigation.
//!
//! The session manager calls out through these traits when a session is
//! about to expire or a redirect to the login page is required. The
//! defaults only log, so the core functions with no UI wired in.

use chrono::Duration;

/// Receives the idle-expiry warning
pub trait SessionNotifier: Send + Sync {
    /// Called once per idle window when the session enters the warning
    /// phase. `remaining` is the time left before forced expiry.
    fn session_expiring(&self, remaining: Duration);
}

/// Performs the redirect after forced logout or a role mismatch
pub trait LoginNavigator: Send + Sync {
    /// Request navigation to the login location, optionally carrying the
    /// page to return to after re-authentication.
    fn redirect_to_login(&self, return_to: Option<&str>);
}

/// Default notifier that logs the warning
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl SessionNotifier for LogNotifier {
    fn session_expiring(&self, remaining: Duration) {
        log::warn!(
            "Session expires in {} seconds without activity",
            remaining.num_seconds()
        );
    }
}

/// Default navigator that logs the redirect request
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNavigator;

impl LoginNavigator for LogNavigator {
    fn redirect_to_login(&self, return_to: Option<&str>) {
        match return_to {
            Some(page) => log::info!("Redirect to login requested (return to {page})"),
            None => log::info!("Redirect to login requested"),
        }
    }
}

//! Session manager implementation.

use super::{
    config::SessionConfig,
    errors::SessionResult,
    hooks::{LogNavigator, LogNotifier, LoginNavigator, SessionNotifier},
    models::{Session, SessionState},
};
use crate::{
    clock::Clock,
    credentials::{Role, UserProfile},
    storage::Storage,
};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use rand::RngCore;
use std::{
    str::FromStr,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

/// Session token length in bytes before encoding (256 bits of entropy)
const TOKEN_LEN: usize = 32;

const TOKEN_KEY: &str = "session_token";
const USERNAME_KEY: &str = "session_username";
const ROLE_KEY: &str = "session_role";
const EXPIRES_KEY: &str = "session_expires_at";
const ACTIVITY_KEY: &str = "session_last_activity";

const SESSION_KEYS: [&str; 5] = [
    TOKEN_KEY,
    USERNAME_KEY,
    ROLE_KEY,
    EXPIRES_KEY,
    ACTIVITY_KEY,
];

/// Session manager
///
/// Owns session lifecycle across two storage scopes. "Remember me" logins
/// go to the persistent scope, everything else to the ephemeral scope; the
/// scope that currently holds a token wins when both are consulted.
#[derive(Clone)]
pub struct SessionManager {
    persistent: Arc<dyn Storage>,
    ephemeral: Arc<dyn Storage>,
    clock: Arc<dyn Clock>,
    config: SessionConfig,
    notifier: Arc<dyn SessionNotifier>,
    navigator: Arc<dyn LoginNavigator>,
    /// Set while the current idle window has already produced a warning
    warning_shown: Arc<AtomicBool>,
}

impl SessionManager {
    /// Create a new session manager with logging-only hooks
    ///
    /// # Arguments
    ///
    /// * `persistent` - Scope that survives application restarts
    /// * `ephemeral` - Scope scoped to the current run
    /// * `clock` - Time source
    /// * `config` - Timeout configuration
    pub fn new(
        persistent: Arc<dyn Storage>,
        ephemeral: Arc<dyn Storage>,
        clock: Arc<dyn Clock>,
        config: SessionConfig,
    ) -> Self {
        Self {
            persistent,
            ephemeral,
            clock,
            config,
            notifier: Arc::new(LogNotifier),
            navigator: Arc::new(LogNavigator),
            warning_shown: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Replace the expiry-warning hook
    pub fn with_notifier(mut self, notifier: Arc<dyn SessionNotifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Replace the redirect hook
    pub fn with_navigator(mut self, navigator: Arc<dyn LoginNavigator>) -> Self {
        self.navigator = navigator;
        self
    }

    /// Create a session for an authenticated user
    ///
    /// Generates a fresh 256-bit token, stores the session fields in the
    /// scope selected by `remember_me`, and clears the other scope so only
    /// one session exists at a time.
    ///
    /// # Arguments
    ///
    /// * `user` - Authenticated user (secret-free profile)
    /// * `remember_me` - Persist the session across restarts
    ///
    /// # Returns
    ///
    /// * `SessionResult<String>` - The new session token
    ///
    /// # Errors
    ///
    /// * `SessionError::Storage` - Persistence layer failed
    pub fn create_session(&self, user: &UserProfile, remember_me: bool) -> SessionResult<String> {
        let token = generate_token();
        let now = self.clock.now();
        let expires_at = now + self.config.timeout;

        let (target, other) = if remember_me {
            (&self.persistent, &self.ephemeral)
        } else {
            (&self.ephemeral, &self.persistent)
        };
        clear_scope(other);

        target.set(TOKEN_KEY, &token)?;
        target.set(USERNAME_KEY, &user.username)?;
        target.set(ROLE_KEY, &user.role.to_string())?;
        target.set(EXPIRES_KEY, &expires_at.to_rfc3339())?;
        target.set(ACTIVITY_KEY, &now.to_rfc3339())?;

        self.warning_shown.store(false, Ordering::Relaxed);
        log::debug!("Session created for {}", user.username);
        Ok(token)
    }

    /// Whether a stored session exists and has not passed its expiry
    ///
    /// Never errors; a missing or unreadable session is simply invalid.
    pub fn has_valid_session(&self) -> bool {
        self.current_session()
            .is_some_and(|s| self.clock.now() < s.expires_at)
    }

    /// Read the stored session, if any
    ///
    /// Returns `None` when no token is stored or any field fails to parse.
    pub fn current_session(&self) -> Option<Session> {
        let scope = self.active_scope()?;
        let get = |key| scope.get(key).ok().flatten();

        Some(Session {
            token: get(TOKEN_KEY)?,
            username: get(USERNAME_KEY)?,
            role: Role::from_str(&get(ROLE_KEY)?).ok()?,
            expires_at: parse_timestamp(&get(EXPIRES_KEY)?)?,
            last_activity: parse_timestamp(&get(ACTIVITY_KEY)?)?,
        })
    }

    /// Record a qualifying user-interaction event
    ///
    /// Resets the idle clock, rolls the absolute expiry forward with it (a
    /// continuously active user is never logged out), and re-arms the
    /// expiry warning. A no-op with no session.
    pub fn record_activity(&self) {
        let Some(scope) = self.active_scope() else {
            return;
        };
        let now = self.clock.now();
        let expires_at = now + self.config.timeout;
        let wrote = scope
            .set(ACTIVITY_KEY, &now.to_rfc3339())
            .and_then(|()| scope.set(EXPIRES_KEY, &expires_at.to_rfc3339()));
        if let Err(e) = wrote {
            log::warn!("Failed to record session activity: {e}");
            return;
        }
        self.warning_shown.store(false, Ordering::Relaxed);
    }

    /// Periodic idle-timeout check
    ///
    /// Intended to run on a timer no coarser than
    /// [`SessionConfig::check_interval`]. Once idle time reaches the
    /// timeout (or the absolute expiry passes), the session is
    /// force-cleared and a redirect to login is requested. Inside the
    /// warning window the notifier fires once per idle stretch.
    pub fn check_idle_timeout(&self) -> SessionState {
        let Some(session) = self.current_session() else {
            return SessionState::NoSession;
        };

        let now = self.clock.now();
        let idle = now - session.last_activity;

        if idle >= self.config.timeout || now >= session.expires_at {
            log::info!("Session expired after inactivity, clearing");
            self.clear_session();
            self.navigator.redirect_to_login(None);
            return SessionState::Expired;
        }

        if idle >= self.config.timeout - self.config.warning_window {
            if !self.warning_shown.swap(true, Ordering::Relaxed) {
                self.notifier.session_expiring(self.config.timeout - idle);
            }
            return SessionState::IdleWarning;
        }

        SessionState::Active
    }

    /// Extend the current session
    ///
    /// Pushes the absolute expiry to `now + timeout` and resets the idle
    /// clock. Returns `false` (a no-op) when no valid session exists.
    pub fn extend_session(&self) -> bool {
        if !self.has_valid_session() {
            return false;
        }
        let Some(scope) = self.active_scope() else {
            return false;
        };

        let now = self.clock.now();
        let expires_at = now + self.config.timeout;
        let wrote = scope
            .set(EXPIRES_KEY, &expires_at.to_rfc3339())
            .and_then(|()| scope.set(ACTIVITY_KEY, &now.to_rfc3339()));
        if let Err(e) = wrote {
            log::warn!("Failed to extend session: {e}");
            return false;
        }

        self.warning_shown.store(false, Ordering::Relaxed);
        true
    }

    /// Erase all session fields from both scopes
    ///
    /// Idempotent; clearing an absent session is a no-op.
    pub fn clear_session(&self) {
        clear_scope(&self.persistent);
        clear_scope(&self.ephemeral);
        self.warning_shown.store(false, Ordering::Relaxed);
    }

    /// Gate access on a valid session with the given role
    ///
    /// Returns `true` when the caller may continue. On a missing, expired,
    /// or role-mismatched session the configured redirect fires and `false`
    /// is returned.
    ///
    /// # Arguments
    ///
    /// * `role` - Required role
    /// * `return_to` - Page to return to after re-authentication
    pub fn require_role(&self, role: Role, return_to: Option<&str>) -> bool {
        let valid = self
            .current_session()
            .is_some_and(|s| self.clock.now() < s.expires_at && s.role == role);
        if !valid {
            self.navigator.redirect_to_login(return_to);
        }
        valid
    }

    /// The scope currently holding a session token, ephemeral first
    fn active_scope(&self) -> Option<&Arc<dyn Storage>> {
        for scope in [&self.ephemeral, &self.persistent] {
            if matches!(scope.get(TOKEN_KEY), Ok(Some(_))) {
                return Some(scope);
            }
        }
        None
    }
}

/// Generate a session token: 32 CSPRNG bytes, URL-safe Base64
fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_LEN];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

fn clear_scope(scope: &Arc<dyn Storage>) {
    for key in SESSION_KEYS {
        if let Err(e) = scope.remove(key) {
            log::warn!("Failed to clear session field {key}: {e}");
        }
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

//! Authenticator implementation.

use super::{
    config::AuthConfig,
    errors::{AuthError, AuthResult},
    models::LoginSuccess,
};
use crate::{
    clock::Clock,
    credentials::{AccountStatus, CredentialStore, UserProfile, UserUpdate},
    password::PasswordHasher,
    session::{SessionError, SessionManager},
};
use rand::Rng;
use std::{
    sync::{Arc, Mutex},
    thread,
    time::Duration as StdDuration,
};

/// Authenticator
///
/// Stateless per attempt: lockout state lives on the user record, so the
/// policy is recomputed fresh on every call.
#[derive(Clone)]
pub struct Authenticator {
    store: CredentialStore,
    sessions: SessionManager,
    hasher: PasswordHasher,
    clock: Arc<dyn Clock>,
    config: AuthConfig,
    /// Serializes the read-modify-write on attempt counters; without it
    /// two concurrent failures for one user could lose an increment.
    attempt_guard: Arc<Mutex<()>>,
}

impl Authenticator {
    /// Create a new authenticator
    ///
    /// # Arguments
    ///
    /// * `store` - Credential store to verify against
    /// * `sessions` - Session manager that issues tokens on success
    /// * `clock` - Time source for lockout windows
    /// * `config` - Lockout policy
    pub fn new(
        store: CredentialStore,
        sessions: SessionManager,
        clock: Arc<dyn Clock>,
        config: AuthConfig,
    ) -> Self {
        Self {
            store,
            sessions,
            hasher: PasswordHasher::new(),
            clock,
            config,
            attempt_guard: Arc::new(Mutex::new(())),
        }
    }

    /// Verify a username/password pair and update login metadata
    ///
    /// On success the failure counter and any lockout are cleared and
    /// `last_login` is stamped. On a wrong password the counter increments
    /// and, at the configured limit, the account locks for the configured
    /// duration.
    ///
    /// # Returns
    ///
    /// * `AuthResult<UserProfile>` - Secret-free profile; `password_hash`
    ///   and `salt` never appear in the success payload
    ///
    /// # Errors
    ///
    /// * `AuthError::InvalidCredentials` - Unknown username
    /// * `AuthError::InvalidPassword` - Wrong password, attempts remaining
    /// * `AuthError::LockoutTriggered` - This failure reached the limit
    /// * `AuthError::AccountLocked` - A lockout window is still open
    /// * `AuthError::AccountSuspended` - Account is suspended
    /// * `AuthError::Storage` - Persistence layer failed while updating
    pub fn authenticate(&self, username: &str, password: &str) -> AuthResult<UserProfile> {
        let _guard = self
            .attempt_guard
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let Some(user) = self.store.find(username) else {
            // Unknown usernames must not fail measurably faster than a
            // real hash verification
            self.enumeration_delay();
            return Err(AuthError::InvalidCredentials);
        };

        let now = self.clock.now();

        if let Some(until) = user.locked_until
            && now < until
        {
            log::debug!("Refused login for locked account {}", user.id);
            return Err(AuthError::AccountLocked { until });
        }

        if user.status == AccountStatus::Suspended {
            log::debug!("Refused login for suspended account {}", user.id);
            return Err(AuthError::AccountSuspended);
        }

        if self
            .hasher
            .verify_password(password, &user.password_hash, &user.salt)
        {
            self.store.update(
                user.id,
                UserUpdate {
                    login_attempts: Some(0),
                    locked_until: Some(None),
                    last_login: Some(now),
                    ..Default::default()
                },
            )?;

            let mut profile = user.profile();
            profile.last_login = Some(now);
            return Ok(profile);
        }

        let attempts = user.login_attempts + 1;
        if attempts >= self.config.max_attempts {
            let until = now + self.config.lockout_duration;
            self.store.update(
                user.id,
                UserUpdate {
                    login_attempts: Some(attempts),
                    locked_until: Some(Some(until)),
                    ..Default::default()
                },
            )?;
            log::warn!(
                "Account {} locked until {until} after {attempts} failed attempts",
                user.id
            );
            return Err(AuthError::LockoutTriggered {
                minutes: self.config.lockout_duration.num_minutes(),
            });
        }

        self.store.update(
            user.id,
            UserUpdate {
                login_attempts: Some(attempts),
                ..Default::default()
            },
        )?;
        Err(AuthError::InvalidPassword {
            attempts,
            limit: self.config.max_attempts,
        })
    }

    /// Authenticate and open a session
    ///
    /// # Arguments
    ///
    /// * `username` - Username
    /// * `password` - Plaintext password
    /// * `remember_me` - Persist the session across restarts
    ///
    /// # Returns
    ///
    /// * `AuthResult<LoginSuccess>` - Profile plus session token
    pub fn login(
        &self,
        username: &str,
        password: &str,
        remember_me: bool,
    ) -> AuthResult<LoginSuccess> {
        let user = self.authenticate(username, password)?;
        let token = self
            .sessions
            .create_session(&user, remember_me)
            .map_err(|SessionError::Storage(e)| AuthError::Storage(e))?;
        log::info!("User {} logged in", user.username);
        Ok(LoginSuccess { user, token })
    }

    /// Explicit logout: clears the session unconditionally
    pub fn logout(&self) {
        self.sessions.clear_session();
    }

    fn enumeration_delay(&self) {
        let range = self.config.unknown_user_delay_ms.clone();
        if range.is_empty() {
            return;
        }
        let ms = rand::rng().random_range(range);
        thread::sleep(StdDuration::from_millis(ms));
    }
}

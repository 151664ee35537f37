//! Credential store implementation.

use super::{
    errors::{CredentialError, CredentialResult},
    models::{AccountStatus, Role, UserId, UserRecord, UserUpdate},
    strength::{MIN_ACCEPTED_SCORE, password_strength},
};
use crate::{
    clock::Clock,
    password::PasswordHasher,
    storage::{Storage, StorageError},
};
use std::sync::Arc;

/// Storage key holding the JSON-encoded user list
const USERS_KEY: &str = "users";

/// Credential store
///
/// Maps usernames to [`UserRecord`]s, persisted as one JSON list in the
/// storage layer. Lookup is a case-sensitive exact match.
#[derive(Clone)]
pub struct CredentialStore {
    storage: Arc<dyn Storage>,
    hasher: PasswordHasher,
    clock: Arc<dyn Clock>,
}

impl CredentialStore {
    /// Create a new credential store
    ///
    /// # Arguments
    ///
    /// * `storage` - Backing key-value store
    /// * `clock` - Time source for creation timestamps
    pub fn new(storage: Arc<dyn Storage>, clock: Arc<dyn Clock>) -> Self {
        Self {
            storage,
            hasher: PasswordHasher::new(),
            clock,
        }
    }

    /// Create a new user account
    ///
    /// The username is HTML-escaped before storage so it can never inject
    /// markup into later rendering; the escaped form is the canonical name
    /// from then on.
    ///
    /// # Arguments
    ///
    /// * `username` - Desired username
    /// * `password` - Plaintext password, scored before acceptance
    /// * `role` - Account role
    ///
    /// # Returns
    ///
    /// * `CredentialResult<UserId>` - ID of the new record
    ///
    /// # Errors
    ///
    /// * `CredentialError::DuplicateUsername` - Username already exists
    /// * `CredentialError::WeakPassword` - Strength score below 3 of 5
    /// * `CredentialError::Storage` - Persistence layer failed
    pub fn create(&self, username: &str, password: &str, role: Role) -> CredentialResult<UserId> {
        let username = sanitize_username(username);

        let mut users = self.load_users()?;
        if users.iter().any(|u| u.username == username) {
            return Err(CredentialError::DuplicateUsername);
        }

        let score = password_strength(password);
        if score < MIN_ACCEPTED_SCORE {
            return Err(CredentialError::WeakPassword(format!(
                "Scored {score} of 5; need at least {MIN_ACCEPTED_SCORE}"
            )));
        }

        let salt = self.hasher.generate_salt();
        let password_hash = self.hasher.hash_password(password, &salt)?;

        let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        users.push(UserRecord {
            id,
            username,
            role,
            status: AccountStatus::Active,
            password_hash,
            salt,
            created_at: self.clock.now(),
            last_login: None,
            login_attempts: 0,
            locked_until: None,
        });

        self.save_users(&users)?;
        log::debug!("Created user {id} with role {role}");
        Ok(id)
    }

    /// Look up a user by exact username
    ///
    /// Storage failures degrade to `None` with a warning; a missing user is
    /// a normal outcome, not an error.
    pub fn find(&self, username: &str) -> Option<UserRecord> {
        match self.load_users() {
            Ok(users) => users.into_iter().find(|u| u.username == username),
            Err(e) => {
                log::warn!("User lookup failed: {e}");
                None
            }
        }
    }

    /// Look up a user by ID
    pub fn find_by_id(&self, id: UserId) -> Option<UserRecord> {
        match self.load_users() {
            Ok(users) => users.into_iter().find(|u| u.id == id),
            Err(e) => {
                log::warn!("User lookup failed: {e}");
                None
            }
        }
    }

    /// Merge a partial update into an existing record
    ///
    /// A no-op (not an error) if `id` does not exist.
    ///
    /// # Errors
    ///
    /// * `CredentialError::Storage` - Persistence layer failed
    pub fn update(&self, id: UserId, changes: UserUpdate) -> CredentialResult<()> {
        let mut users = self.load_users()?;
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            log::debug!("Update for unknown user {id} ignored");
            return Ok(());
        };

        if let Some(status) = changes.status {
            user.status = status;
        }
        if let Some(last_login) = changes.last_login {
            user.last_login = Some(last_login);
        }
        if let Some(attempts) = changes.login_attempts {
            user.login_attempts = attempts;
        }
        if let Some(locked_until) = changes.locked_until {
            user.locked_until = locked_until;
        }

        self.save_users(&users)
    }

    /// Change a user's password
    ///
    /// Generates a fresh salt, enforces the strength rubric, and resets the
    /// failed-attempt counter and any lockout.
    ///
    /// # Errors
    ///
    /// * `CredentialError::WeakPassword` - Strength score below 3 of 5
    /// * `CredentialError::Storage` - Persistence layer failed
    pub fn change_password(&self, id: UserId, new_password: &str) -> CredentialResult<()> {
        let score = password_strength(new_password);
        if score < MIN_ACCEPTED_SCORE {
            return Err(CredentialError::WeakPassword(format!(
                "Scored {score} of 5; need at least {MIN_ACCEPTED_SCORE}"
            )));
        }

        let mut users = self.load_users()?;
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(());
        };

        let salt = self.hasher.generate_salt();
        user.password_hash = self.hasher.hash_password(new_password, &salt)?;
        user.salt = salt;
        user.login_attempts = 0;
        user.locked_until = None;

        self.save_users(&users)
    }

    /// Seed the demo accounts if the store is empty
    ///
    /// Creates `student`/`password123` and `admin`/`admin123`, the accounts
    /// the portal ships with.
    ///
    /// # Errors
    ///
    /// * `CredentialError::Storage` - Persistence layer failed
    pub fn seed_defaults(&self) -> CredentialResult<()> {
        if !self.load_users()?.is_empty() {
            return Ok(());
        }
        self.create("student", "password123", Role::Student)?;
        self.create("admin", "admin123", Role::Admin)?;
        log::info!("Seeded default demo accounts");
        Ok(())
    }

    fn load_users(&self) -> CredentialResult<Vec<UserRecord>> {
        match self.storage.get(USERS_KEY)? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| CredentialError::Storage(StorageError::Corrupt(e.to_string()))),
        }
    }

    fn save_users(&self, users: &[UserRecord]) -> CredentialResult<()> {
        let raw = serde_json::to_string(users)
            .map_err(|e| CredentialError::Storage(StorageError::Corrupt(e.to_string())))?;
        self.storage.set(USERS_KEY, &raw)?;
        Ok(())
    }
}

/// HTML-escape a username before it is stored
fn sanitize_username(username: &str) -> String {
    let mut escaped = String::with_capacity(username.len());
    for c in username.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

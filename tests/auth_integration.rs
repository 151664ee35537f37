//! Integration tests for the authentication and session stack.
//!
//! Exercises the full login flow against in-memory storage and a manual
//! clock: seeding, lockout, lock expiry, session expiry, and storage
//! degradation.

use chrono::Duration;
use portal_auth::auth::{AuthConfig, AuthError, Authenticator};
use portal_auth::clock::ManualClock;
use portal_auth::credentials::{CredentialError, CredentialStore, Role};
use portal_auth::session::{SessionConfig, SessionManager, SessionState};
use portal_auth::storage::{MemoryStorage, Storage, StorageError, StorageResult};
use std::sync::Arc;

struct Portal {
    auth: Authenticator,
    sessions: SessionManager,
    store: CredentialStore,
    clock: ManualClock,
}

/// Wire the whole stack the way the portal boots it
fn setup_portal() -> Portal {
    let clock = ManualClock::starting_now();
    let persistent = Arc::new(MemoryStorage::new());
    let ephemeral = Arc::new(MemoryStorage::new());

    let store = CredentialStore::new(persistent.clone(), Arc::new(clock.clone()));
    store.seed_defaults().expect("seeding should succeed");

    let sessions = SessionManager::new(
        persistent,
        ephemeral,
        Arc::new(clock.clone()),
        SessionConfig::default(),
    );
    let auth = Authenticator::new(
        store.clone(),
        sessions.clone(),
        Arc::new(clock.clone()),
        AuthConfig::without_delay(),
    );

    Portal {
        auth,
        sessions,
        store,
        clock,
    }
}

#[test]
fn test_seeded_student_can_log_in() {
    let portal = setup_portal();

    let login = portal
        .auth
        .login("student", "password123", false)
        .expect("seeded credentials should work");

    assert_eq!(login.user.username, "student");
    assert_eq!(login.user.role, Role::Student);
    assert!(portal.sessions.has_valid_session());
    assert_eq!(portal.sessions.check_idle_timeout(), SessionState::Active);
}

#[test]
fn test_lockout_scenario_end_to_end() {
    let portal = setup_portal();

    // Five wrong passwords; the fifth locks
    for _ in 0..4 {
        let err = portal.auth.login("student", "wrong", false).unwrap_err();
        assert!(!err.is_lockout());
    }
    let err = portal.auth.login("student", "wrong", false).unwrap_err();
    assert!(err.is_lockout());

    // Correct password still refused while locked
    let err = portal
        .auth
        .login("student", "password123", false)
        .unwrap_err();
    assert!(err.is_lockout());
    assert!(!portal.sessions.has_valid_session());

    // After the window passes the correct password works again
    portal.clock.advance(Duration::minutes(16));
    let login = portal.auth.login("student", "password123", false).unwrap();
    assert_eq!(login.user.username, "student");
    assert!(portal.sessions.has_valid_session());
}

#[test]
fn test_session_expires_and_redirects() {
    let portal = setup_portal();
    portal.auth.login("student", "password123", false).unwrap();

    portal.clock.advance(Duration::minutes(31));
    assert!(!portal.sessions.has_valid_session());
    assert_eq!(portal.sessions.check_idle_timeout(), SessionState::Expired);

    // Protected admin page refuses after expiry
    assert!(!portal.sessions.require_role(Role::Student, Some("grades")));
}

#[test]
fn test_role_gate_uses_session_role() {
    let portal = setup_portal();

    portal.auth.login("admin", "admin123", false).unwrap();
    assert!(portal.sessions.require_role(Role::Admin, None));
    assert!(!portal.sessions.require_role(Role::Student, None));
}

#[test]
fn test_remember_me_survives_ephemeral_loss() {
    let clock = ManualClock::starting_now();
    let persistent = Arc::new(MemoryStorage::new());
    let ephemeral = Arc::new(MemoryStorage::new());

    let store = CredentialStore::new(persistent.clone(), Arc::new(clock.clone()));
    store.seed_defaults().unwrap();

    let sessions = SessionManager::new(
        persistent.clone(),
        ephemeral,
        Arc::new(clock.clone()),
        SessionConfig::default(),
    );
    let auth = Authenticator::new(
        store,
        sessions,
        Arc::new(clock.clone()),
        AuthConfig::without_delay(),
    );
    auth.login("student", "password123", true).unwrap();

    // A fresh ephemeral scope simulates a new tab; the persistent scope
    // still carries the session
    let rebooted = SessionManager::new(
        persistent,
        Arc::new(MemoryStorage::new()),
        Arc::new(clock.clone()),
        SessionConfig::default(),
    );
    assert!(rebooted.has_valid_session());
}

#[test]
fn test_new_user_registration_flow() {
    let portal = setup_portal();

    // Too weak, then duplicate, then accepted
    let weak = portal.store.create("carol", "abc", Role::Student);
    assert!(matches!(weak, Err(CredentialError::WeakPassword(_))));

    let dup = portal.store.create("student", "Abcdef12!", Role::Student);
    assert!(matches!(dup, Err(CredentialError::DuplicateUsername)));

    portal.store.create("carol", "Abcdef12!", Role::Student).unwrap();
    let login = portal.auth.login("carol", "Abcdef12!", false).unwrap();
    assert_eq!(login.user.username, "carol");
}

/// Storage that refuses every operation, simulating disabled or full
/// storage
struct BrokenStorage;

impl Storage for BrokenStorage {
    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }

    fn remove(&self, _key: &str) -> StorageResult<()> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }
}

#[test]
fn test_broken_storage_degrades_without_panicking() {
    let clock = ManualClock::starting_now();
    let broken = Arc::new(BrokenStorage);

    let store = CredentialStore::new(broken.clone(), Arc::new(clock.clone()));
    let create = store.create("dave", "Abcdef12!", Role::Student);
    assert!(matches!(create, Err(CredentialError::Storage(_))));

    let sessions = SessionManager::new(
        broken,
        Arc::new(BrokenStorage),
        Arc::new(clock.clone()),
        SessionConfig::default(),
    );
    // Checks and clears never throw, absence is the answer
    assert!(!sessions.has_valid_session());
    assert_eq!(sessions.check_idle_timeout(), SessionState::NoSession);
    assert!(!sessions.extend_session());
    sessions.clear_session();

    let auth = Authenticator::new(
        store,
        sessions,
        Arc::new(clock.clone()),
        AuthConfig::without_delay(),
    );
    let err = auth.login("dave", "Abcdef12!", false).unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
    assert_eq!(err.client_message(), "Invalid credentials");
}

/// Property-based tests for password hashing using proptest
///
/// Verifies the derivation laws across arbitrary passwords: determinism,
/// salt sensitivity, and the verify round trip. Case counts are kept low
/// because each case pays for a full Argon2id derivation.
use portal_auth::password::PasswordHasher;
use proptest::prelude::*;

// Strategy for passwords: printable ASCII plus a sprinkling of non-ASCII,
// including the empty string
fn password_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ -~]{0,24}",
        "[a-zA-Z0-9äöüß€🔒]{1,12}",
        Just(String::new()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn test_hash_deterministic(password in password_strategy()) {
        let hasher = PasswordHasher::new();
        let salt = hasher.generate_salt();

        let first = hasher.hash_password(&password, &salt).unwrap();
        let second = hasher.hash_password(&password, &salt).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_distinct_salts_change_hash(password in password_strategy()) {
        let hasher = PasswordHasher::new();
        let salt_a = hasher.generate_salt();
        let salt_b = hasher.generate_salt();
        prop_assume!(salt_a != salt_b);

        let hash_a = hasher.hash_password(&password, &salt_a).unwrap();
        let hash_b = hasher.hash_password(&password, &salt_b).unwrap();
        prop_assert_ne!(hash_a, hash_b);
    }

    #[test]
    fn test_verify_roundtrip(password in password_strategy()) {
        let hasher = PasswordHasher::new();
        let salt = hasher.generate_salt();
        let hash = hasher.hash_password(&password, &salt).unwrap();

        prop_assert!(hasher.verify_password(&password, &hash, &salt));
    }

    #[test]
    fn test_wrong_password_rejected(
        password in password_strategy(),
        other in password_strategy(),
    ) {
        prop_assume!(password != other);

        let hasher = PasswordHasher::new();
        let salt = hasher.generate_salt();
        let hash = hasher.hash_password(&password, &salt).unwrap();

        prop_assert!(!hasher.verify_password(&other, &hash, &salt));
    }

    #[test]
    fn test_hash_never_echoes_password(password in "[ -~]{1,24}") {
        let hasher = PasswordHasher::new();
        let salt = hasher.generate_salt();
        let hash = hasher.hash_password(&password, &salt).unwrap();

        prop_assert_ne!(hash, password);
    }
}

//! Argon2id password hasher with explicit per-user salts.

use super::errors::{PasswordError, PasswordResult};
use argon2::Argon2;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::RngCore;
use subtle::ConstantTimeEq;

/// Salt length in bytes before encoding
const SALT_LEN: usize = 16;

/// Derived hash length in bytes before encoding
const HASH_LEN: usize = 32;

/// Password hasher
///
/// Uses Argon2id with the crate-default parameters (19 MiB memory, 2
/// iterations, 1 lane), the OWASP baseline work factor. The salt is stored
/// separately from the hash, so derivation is deterministic given
/// `(password, salt)`.
///
/// Passwords are hashed as the UTF-8 bytes handed in; no Unicode
/// normalization is applied. Callers that accept passwords from multiple
/// input methods must normalize before calling in.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher
    pub fn new() -> Self {
        Self
    }

    /// Generate a fresh random salt, URL-safe Base64 encoded
    ///
    /// # Returns
    ///
    /// * `String` - 16 bytes of CSPRNG output as a printable string
    pub fn generate_salt(&self) -> String {
        let mut bytes = [0u8; SALT_LEN];
        rand::rng().fill_bytes(&mut bytes);
        URL_SAFE_NO_PAD.encode(bytes)
    }

    /// Derive a hash from a password and an encoded salt
    ///
    /// Deterministic: the same `(password, salt)` pair always yields the
    /// same hash. The empty string is a valid password and hashes
    /// consistently.
    ///
    /// # Arguments
    ///
    /// * `password` - Plaintext password
    /// * `salt` - Encoded salt from [`PasswordHasher::generate_salt`]
    ///
    /// # Returns
    ///
    /// * `PasswordResult<String>` - 32-byte derived key, Base64 encoded
    ///
    /// # Errors
    ///
    /// * `PasswordError::InvalidSalt` - Salt is not valid Base64
    /// * `PasswordError::Hashing` - Key derivation failed
    pub fn hash_password(&self, password: &str, salt: &str) -> PasswordResult<String> {
        let salt_bytes = URL_SAFE_NO_PAD
            .decode(salt)
            .map_err(|e| PasswordError::InvalidSalt(e.to_string()))?;

        let mut output = [0u8; HASH_LEN];
        Argon2::default()
            .hash_password_into(password.as_bytes(), &salt_bytes, &mut output)
            .map_err(|e| PasswordError::Hashing(e.to_string()))?;

        Ok(URL_SAFE_NO_PAD.encode(output))
    }

    /// Verify a password against a stored hash and salt
    ///
    /// Recomputes the derivation and compares the encoded hashes in
    /// constant time. Returns `false` on any internal error (bad salt,
    /// derivation failure) rather than propagating it; verification is
    /// never allowed to panic or throw.
    pub fn verify_password(&self, password: &str, stored_hash: &str, salt: &str) -> bool {
        match self.hash_password(password, salt) {
            Ok(computed) => computed.as_bytes().ct_eq(stored_hash.as_bytes()).into(),
            Err(e) => {
                log::warn!("Password verification failed internally: {e}");
                false
            }
        }
    }
}

//! Authentication configuration.

use chrono::Duration;
use std::{env, ops::Range};

/// Lockout and anti-enumeration configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Consecutive failures allowed before lockout
    pub max_attempts: u32,

    /// How long a lockout lasts
    pub lockout_duration: Duration,

    /// Artificial delay range (milliseconds) applied to unknown-username
    /// failures so they are not measurably faster than hash verification.
    /// An empty range disables the delay (tests).
    pub unknown_user_delay_ms: Range<u64>,
}

impl AuthConfig {
    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `AUTH_MAX_LOGIN_ATTEMPTS`: Failures before lockout (default: 5)
    /// - `AUTH_LOCKOUT_MINS`: Lockout duration in minutes (default: 15)
    pub fn from_env() -> Self {
        Self {
            max_attempts: env::var("AUTH_MAX_LOGIN_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            lockout_duration: Duration::minutes(
                env::var("AUTH_LOCKOUT_MINS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(15),
            ),
            unknown_user_delay_ms: 50..150,
        }
    }

    /// Configuration with the artificial delay disabled, for tests
    pub fn without_delay() -> Self {
        Self {
            unknown_user_delay_ms: 0..0,
            ..Self::default()
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            lockout_duration: Duration::minutes(15),
            unknown_user_delay_ms: 50..150,
        }
    }
}

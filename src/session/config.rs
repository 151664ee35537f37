//! Session configuration.

use chrono::Duration;
use std::env;

/// Session timing configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Idle timeout; also the absolute lifetime granted per extension
    pub timeout: Duration,

    /// How long before idle expiry the warning fires
    pub warning_window: Duration,

    /// How often the embedding application should call
    /// [`crate::session::SessionManager::check_idle_timeout`]
    pub check_interval: Duration,
}

impl SessionConfig {
    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `SESSION_TIMEOUT_MINS`: Idle timeout in minutes (default: 30)
    /// - `SESSION_WARNING_MINS`: Warning lead time in minutes (default: 5)
    /// - `SESSION_CHECK_SECS`: Suggested check interval in seconds (default: 60)
    pub fn from_env() -> Self {
        Self {
            timeout: Duration::minutes(
                env::var("SESSION_TIMEOUT_MINS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(30),
            ),
            warning_window: Duration::minutes(
                env::var("SESSION_WARNING_MINS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(5),
            ),
            check_interval: Duration::seconds(
                env::var("SESSION_CHECK_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60),
            ),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::minutes(30),
            warning_window: Duration::minutes(5),
            check_interval: Duration::seconds(60),
        }
    }
}

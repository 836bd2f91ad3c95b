//! OTP subsystem configuration

use serde::{Deserialize, Serialize};

/// Settings for one-time passcode issuance and verification
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpSettings {
    /// Number of minutes before an issued code expires
    #[serde(default = "default_expiration_minutes")]
    pub code_expiration_minutes: i64,

    /// Maximum number of verification attempts per code
    #[serde(default = "default_max_attempts")]
    pub max_attempts: i32,

    /// How often the expired-record reaper runs, in seconds
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval_seconds: u64,
}

impl Default for OtpSettings {
    fn default() -> Self {
        Self {
            code_expiration_minutes: default_expiration_minutes(),
            max_attempts: default_max_attempts(),
            cleanup_interval_seconds: default_cleanup_interval(),
        }
    }
}

impl OtpSettings {
    /// Create from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let code_expiration_minutes = std::env::var("OTP_EXPIRATION_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_expiration_minutes);
        let max_attempts = std::env::var("OTP_MAX_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_max_attempts);
        let cleanup_interval_seconds = std::env::var("OTP_CLEANUP_INTERVAL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_cleanup_interval);

        Self {
            code_expiration_minutes,
            max_attempts,
            cleanup_interval_seconds,
        }
    }
}

fn default_expiration_minutes() -> i64 {
    5
}

fn default_max_attempts() -> i32 {
    5
}

fn default_cleanup_interval() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = OtpSettings::default();
        assert_eq!(settings.code_expiration_minutes, 5);
        assert_eq!(settings.max_attempts, 5);
        assert_eq!(settings.cleanup_interval_seconds, 60);
    }
}

//! Configuration for the OTP service

use vy_shared::config::OtpSettings;

use crate::domain::entities::otp_record::{DEFAULT_EXPIRATION_MINUTES, MAX_ATTEMPTS};

/// Configuration for the OTP service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Number of minutes before an issued code expires
    pub code_expiration_minutes: i64,
    /// Maximum number of verification attempts allowed
    pub max_attempts: i32,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            code_expiration_minutes: DEFAULT_EXPIRATION_MINUTES,
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

impl From<OtpSettings> for OtpServiceConfig {
    fn from(settings: OtpSettings) -> Self {
        Self {
            code_expiration_minutes: settings.code_expiration_minutes,
            max_attempts: settings.max_attempts,
        }
    }
}

//! One-time passcode entity for email-based verification flows.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of verification attempts allowed per code
pub const MAX_ATTEMPTS: i32 = 5;

/// Length of the one-time passcode
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for issued codes (5 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 5;

/// The operation context a one-time passcode is scoped to.
///
/// Codes are never valid across purposes: a code issued for password
/// recovery cannot verify an email change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OtpPurpose {
    /// Account registration confirmation
    Register,
    /// Password recovery flow
    ForgotPassword,
    /// Email address change confirmation
    ChangeEmail,
}

impl OtpPurpose {
    /// Stable string form, matching the persisted representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OtpPurpose::Register => "register",
            OtpPurpose::ForgotPassword => "forgot_password",
            OtpPurpose::ChangeEmail => "change_email",
        }
    }
}

impl std::fmt::Display for OtpPurpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One-time passcode record for email-based verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    /// Unique identifier for the record; external callers only ever see
    /// an encoded form of this, never the raw value
    pub id: Uuid,

    /// Email address the code was issued for (normalized lowercase)
    pub email: String,

    /// Purpose the code is scoped to
    pub purpose: OtpPurpose,

    /// The 6-digit passcode
    pub code: String,

    /// Number of failed verification attempts made
    pub attempts: i32,

    /// Whether the code has been successfully verified (one-time use)
    pub consumed: bool,

    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,
}

impl OtpRecord {
    /// Creates a new record with a random 6-digit code and the default
    /// 5-minute expiry
    pub fn new(email: String, purpose: OtpPurpose) -> Self {
        Self::new_with_expiration(email, purpose, DEFAULT_EXPIRATION_MINUTES)
    }

    /// Creates a new record with a custom expiration time
    ///
    /// # Arguments
    ///
    /// * `email` - Normalized email address the code is issued for
    /// * `purpose` - Operation context the code is scoped to
    /// * `expiration_minutes` - Number of minutes until the code expires
    pub fn new_with_expiration(
        email: String,
        purpose: OtpPurpose,
        expiration_minutes: i64,
    ) -> Self {
        let code = Self::generate_code();
        let now = Utc::now();
        let expires_at = now + Duration::minutes(expiration_minutes);

        Self {
            id: Uuid::new_v4(),
            email,
            purpose,
            code,
            attempts: 0,
            consumed: false,
            created_at: now,
            expires_at,
        }
    }

    /// Generates a random 6-digit code, zero-padded
    ///
    /// Uniform over the full 000000-999999 range; collisions across
    /// records are permitted and harmless.
    fn generate_code() -> String {
        let mut rng = rand::thread_rng();
        let code: u32 = rng.gen_range(0..1_000_000);
        format!("{:06}", code)
    }

    /// Checks if the code has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Checks if the record can still accept a verification attempt
    ///
    /// A record is verifiable if it hasn't expired, hasn't been consumed,
    /// and the attempt ceiling hasn't been reached.
    pub fn is_verifiable(&self) -> bool {
        !self.is_expired() && !self.consumed && self.attempts < MAX_ATTEMPTS
    }

    /// Gets the number of remaining verification attempts (0 if exhausted)
    pub fn remaining_attempts(&self) -> i32 {
        (MAX_ATTEMPTS - self.attempts).max(0)
    }

    /// Gets the time remaining until expiration, or zero if expired
    pub fn time_until_expiration(&self) -> Duration {
        let now = Utc::now();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}

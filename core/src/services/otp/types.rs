//! Types for OTP service results

use chrono::{DateTime, Utc};

/// Result of issuing a one-time passcode
#[derive(Debug, Clone)]
pub struct IssueOtpResult {
    /// Encoded record identifier for the client to hold
    pub otp_id: String,
    /// When the issued code expires
    pub expires_at: DateTime<Utc>,
    /// The delivery provider's message id
    pub message_id: String,
}

/// Result of a successful verification
#[derive(Debug, Clone)]
pub struct VerifyOtpResult {
    /// The same encoded identifier, echoed back for the dependent step
    /// (e.g. password reset)
    pub otp_id: String,
}

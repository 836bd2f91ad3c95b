//! OTP verification error types
//!
//! One variant per caller-facing failure. Messages never contain raw
//! storage identifiers; the presentation layer maps these to responses.

use thiserror::Error;

/// Failures of the one-time-passcode lifecycle
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OtpError {
    /// The submitted opaque identifier could not be decoded
    #[error("Invalid verification identifier")]
    InvalidOtpId,

    /// No matching record, or the code was already used. The two cases
    /// are deliberately indistinguishable so callers cannot enumerate
    /// valid identifiers.
    #[error("Verification code does not exist or has already been used")]
    NotFoundOrUsed,

    /// The code's validity window has passed
    #[error("Verification code has expired")]
    Expired,

    /// The attempt ceiling was reached; only re-issuance recovers
    #[error("Too many failed attempts. Please request a new code")]
    TooManyAttempts,

    /// The submitted code did not match
    #[error("Incorrect verification code. {remaining} attempt(s) remaining")]
    CodeMismatch { remaining: i32 },

    /// The delivery collaborator failed; the issuance as a whole failed
    #[error("Failed to deliver verification code. Please try again later")]
    DeliveryFailed,
}

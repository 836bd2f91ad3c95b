//! Main OTP service implementation

use std::sync::Arc;

use constant_time_eq::constant_time_eq;
use vy_shared::utils::email::{is_valid_email, mask_email, normalize_email};

use crate::domain::entities::otp_record::{OtpPurpose, OtpRecord};
use crate::errors::{DomainError, DomainResult, OtpError};
use crate::repositories::otp::OtpRepository;

use super::config::OtpServiceConfig;
use super::encoding::{decode_otp_id, encode_otp_id};
use super::traits::MailerTrait;
use super::types::{IssueOtpResult, VerifyOtpResult};

/// Service coordinating issuance, verification and verified-identity
/// lookup of one-time passcodes
pub struct OtpService<R: OtpRepository, M: MailerTrait> {
    /// Backing store for OTP records
    repository: Arc<R>,
    /// Email delivery collaborator
    mailer: Arc<M>,
    /// Service configuration
    config: OtpServiceConfig,
}

impl<R: OtpRepository, M: MailerTrait> OtpService<R, M> {
    /// Create a new OTP service
    pub fn new(repository: Arc<R>, mailer: Arc<M>, config: OtpServiceConfig) -> Self {
        Self {
            repository,
            mailer,
            config,
        }
    }

    /// Issue a new passcode for an (email, purpose) pair
    ///
    /// This method:
    /// 1. Normalizes and validates the email address
    /// 2. Atomically invalidates previous unconsumed codes for the pair
    ///    and persists a fresh record (single-active-record invariant)
    /// 3. Delivers the code via the mailer; delivery failure fails the
    ///    whole issuance
    ///
    /// Re-sending a code is just calling `issue` again: the replace
    /// semantics make the newest code the only live one.
    ///
    /// Note: the record is persisted before delivery is attempted, so a
    /// delivery failure can leave a stored-but-undelivered record behind
    /// until it expires. Callers should treat issuance failure as "no
    /// valid code outstanding".
    ///
    /// # Returns
    ///
    /// * `Ok(IssueOtpResult)` - The encoded record id and expiry
    /// * `Err(DomainError)` - Validation, storage, or delivery failure
    pub async fn issue(&self, email: &str, purpose: OtpPurpose) -> DomainResult<IssueOtpResult> {
        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(DomainError::Validation {
                message: format!("Invalid email address format: {}", mask_email(&email)),
            });
        }

        let record = OtpRecord::new_with_expiration(
            email.clone(),
            purpose,
            self.config.code_expiration_minutes,
        );
        let expires_at = record.expires_at;
        let record_id = record.id;
        let code = record.code.clone();

        // Delete-previous + insert runs atomically inside the repository
        self.repository.replace_active(record).await?;

        tracing::info!(
            email = %mask_email(&email),
            purpose = %purpose,
            event = "otp_issued",
            "Issued new verification code"
        );

        let message_id = self
            .mailer
            .send_otp(&email, &code, purpose)
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %mask_email(&email),
                    purpose = %purpose,
                    error = %e,
                    event = "otp_delivery_failed",
                    "Failed to deliver verification code"
                );
                DomainError::Otp(OtpError::DeliveryFailed)
            })?;

        Ok(IssueOtpResult {
            otp_id: encode_otp_id(record_id),
            expires_at,
            message_id,
        })
    }

    /// Verify a submitted code against a stored record
    ///
    /// Evaluation order is fixed; the first matching condition wins:
    /// 1. Undecodable id -> `InvalidOtpId`, nothing touched
    /// 2. No unconsumed record for (id, purpose) -> `NotFoundOrUsed`
    /// 3. Past expiry -> `Expired`, no attempt increment
    /// 4. Attempt ceiling reached -> `TooManyAttempts`, no further increment
    /// 5. Mismatch -> increment attempts, report remaining
    /// 6. Match -> mark consumed, return the encoded id for the next step
    ///
    /// Expiry is re-checked here even though a background reaper also
    /// deletes expired rows; logical validity never depends on the reaper.
    ///
    /// # Returns
    ///
    /// * `Ok(VerifyOtpResult)` - Verification succeeded; code is consumed
    /// * `Err(DomainError)` - One of the failures above, or storage failure
    pub async fn verify(
        &self,
        encoded_id: &str,
        submitted_code: &str,
        purpose: OtpPurpose,
    ) -> DomainResult<VerifyOtpResult> {
        let id = decode_otp_id(encoded_id).ok_or(OtpError::InvalidOtpId)?;

        let record = self
            .repository
            .find_by_id(id, purpose, false)
            .await?
            .ok_or(OtpError::NotFoundOrUsed)?;

        if record.is_expired() {
            tracing::info!(
                purpose = %purpose,
                event = "otp_expired",
                "Verification attempted against expired code"
            );
            return Err(OtpError::Expired.into());
        }

        if record.attempts >= self.config.max_attempts {
            tracing::warn!(
                purpose = %purpose,
                attempts = record.attempts,
                event = "otp_attempts_exhausted",
                "Verification refused, attempt ceiling reached"
            );
            return Err(OtpError::TooManyAttempts.into());
        }

        if !constant_time_eq(submitted_code.as_bytes(), record.code.as_bytes()) {
            // Atomic increment; a concurrent consumption makes this a no-op
            let updated = self
                .repository
                .record_failed_attempt(id)
                .await?
                .ok_or(OtpError::NotFoundOrUsed)?;

            let remaining = (self.config.max_attempts - updated.attempts).max(0);
            return Err(OtpError::CodeMismatch { remaining }.into());
        }

        // Conditional consume: exactly one of two concurrent correct
        // submissions can win.
        if !self.repository.mark_consumed(id).await? {
            return Err(OtpError::NotFoundOrUsed.into());
        }

        tracing::info!(
            email = %mask_email(&record.email),
            purpose = %purpose,
            event = "otp_verified",
            "Verification code accepted"
        );

        Ok(VerifyOtpResult {
            otp_id: encoded_id.to_string(),
        })
    }

    /// Resolve a verified record back to its email address
    ///
    /// Returns the address only for a record of the same purpose that has
    /// already been consumed; a dependent step (e.g. password reset) uses
    /// this instead of re-submitting the code. Expiry is deliberately not
    /// re-checked here: consumption already proved possession of the code
    /// within its validity window. Read-only; fails closed to `Ok(None)`
    /// on decode failure.
    pub async fn verified_email(
        &self,
        encoded_id: &str,
        purpose: OtpPurpose,
    ) -> DomainResult<Option<String>> {
        let Some(id) = decode_otp_id(encoded_id) else {
            return Ok(None);
        };

        let record = self.repository.find_by_id(id, purpose, true).await?;
        Ok(record.map(|r| r.email))
    }
}

//! OTP repository trait defining the interface for passcode persistence.
//!
//! The trait is shaped so that every read-check-mutate sequence the
//! verification flow needs is a single atomic store operation. Two
//! concurrent issuances for the same (email, purpose) pair must never
//! leave two live unconsumed records, and two concurrent submissions of
//! the same correct code must never both succeed; implementations
//! discharge both obligations inside `replace_active`,
//! `record_failed_attempt` and `mark_consumed`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::otp_record::{OtpPurpose, OtpRecord};
use crate::errors::DomainError;

/// Repository trait for OTP record persistence operations
#[async_trait]
pub trait OtpRepository: Send + Sync {
    /// Atomically delete every unconsumed record for the new record's
    /// (email, purpose) pair and insert the new record.
    ///
    /// Deleting zero records is not an error. This enforces the
    /// single-active-record invariant at issuance time.
    ///
    /// # Returns
    /// * `Ok(OtpRecord)` - The persisted record
    /// * `Err(DomainError)` - Storage failure
    async fn replace_active(&self, record: OtpRecord) -> Result<OtpRecord, DomainError>;

    /// Find a record by identifier, purpose and consumption state.
    ///
    /// Callers must still check `expires_at` on the returned record;
    /// logical expiry never depends on physical reaping having run.
    ///
    /// # Returns
    /// * `Ok(Some(OtpRecord))` - Matching record found
    /// * `Ok(None)` - No record matches the full filter
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_id(
        &self,
        id: Uuid,
        purpose: OtpPurpose,
        consumed: bool,
    ) -> Result<Option<OtpRecord>, DomainError>;

    /// Atomically increment the attempt counter of a record that is
    /// still unconsumed.
    ///
    /// # Returns
    /// * `Ok(Some(OtpRecord))` - The updated record
    /// * `Ok(None)` - Record missing or already consumed; nothing written
    /// * `Err(DomainError)` - Storage failure
    async fn record_failed_attempt(&self, id: Uuid) -> Result<Option<OtpRecord>, DomainError>;

    /// Atomically mark a record consumed if it is currently unconsumed.
    ///
    /// # Returns
    /// * `Ok(true)` - This caller consumed the record
    /// * `Ok(false)` - Record missing or a concurrent caller consumed it first
    /// * `Err(DomainError)` - Storage failure
    async fn mark_consumed(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Physically remove records whose `expires_at` is before `now`.
    ///
    /// # Returns
    /// * `Ok(count)` - Number of records removed
    /// * `Err(DomainError)` - Storage failure
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError>;
}

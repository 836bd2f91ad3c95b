//! In-memory implementation of OtpRepository
//!
//! Used by unit and integration tests, and as the reference semantics
//! for a future SQL-backed implementation. All compound operations run
//! under a single write guard, which makes them atomic with respect to
//! every other repository call.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::otp_record::{OtpPurpose, OtpRecord};
use crate::errors::DomainError;

use super::trait_::OtpRepository;

/// In-memory OTP repository
pub struct MockOtpRepository {
    records: Arc<RwLock<HashMap<Uuid, OtpRecord>>>,
}

impl MockOtpRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Count unconsumed records for an (email, purpose) pair
    ///
    /// Test helper for asserting the single-active-record invariant.
    pub async fn count_active(&self, email: &str, purpose: OtpPurpose) -> usize {
        let records = self.records.read().await;
        records
            .values()
            .filter(|r| r.email == email && r.purpose == purpose && !r.consumed)
            .count()
    }

    /// Fetch a record regardless of state (test helper)
    pub async fn get(&self, id: Uuid) -> Option<OtpRecord> {
        let records = self.records.read().await;
        records.get(&id).cloned()
    }

    /// Overwrite a record in place (test helper for backdating expiry)
    pub async fn put(&self, record: OtpRecord) {
        let mut records = self.records.write().await;
        records.insert(record.id, record);
    }
}

impl Default for MockOtpRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OtpRepository for MockOtpRepository {
    async fn replace_active(&self, record: OtpRecord) -> Result<OtpRecord, DomainError> {
        let mut records = self.records.write().await;

        // Delete-then-insert under one guard: the single-active-record
        // invariant holds even under concurrent issuance.
        records.retain(|_, r| {
            !(r.email == record.email && r.purpose == record.purpose && !r.consumed)
        });
        records.insert(record.id, record.clone());

        Ok(record)
    }

    async fn find_by_id(
        &self,
        id: Uuid,
        purpose: OtpPurpose,
        consumed: bool,
    ) -> Result<Option<OtpRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .get(&id)
            .filter(|r| r.purpose == purpose && r.consumed == consumed)
            .cloned())
    }

    async fn record_failed_attempt(&self, id: Uuid) -> Result<Option<OtpRecord>, DomainError> {
        let mut records = self.records.write().await;
        match records.get_mut(&id) {
            Some(record) if !record.consumed => {
                record.attempts += 1;
                Ok(Some(record.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn mark_consumed(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;
        match records.get_mut(&id) {
            Some(record) if !record.consumed => {
                record.consumed = true;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, r| r.expires_at >= now);
        Ok(before - records.len())
    }
}

//! Background reaping of expired OTP records
//!
//! Storage-level removal of expired rows. Read paths never rely on this
//! having run; they re-check `expires_at` themselves.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use crate::errors::DomainError;
use crate::repositories::otp::OtpRepository;

/// Configuration for the OTP cleanup service
#[derive(Debug, Clone)]
pub struct OtpCleanupConfig {
    /// How often to run cleanup (in seconds)
    pub interval_seconds: u64,
    /// Whether to enable automatic cleanup
    pub enabled: bool,
}

impl Default for OtpCleanupConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 60,
            enabled: true,
        }
    }
}

/// Service for physically removing expired OTP records
pub struct OtpCleanupService<R: OtpRepository + 'static> {
    repository: Arc<R>,
    config: OtpCleanupConfig,
}

impl<R: OtpRepository> OtpCleanupService<R> {
    /// Create a new cleanup service
    pub fn new(repository: Arc<R>, config: OtpCleanupConfig) -> Self {
        Self { repository, config }
    }

    /// Run a single cleanup cycle
    ///
    /// # Returns
    /// * `Ok(count)` - Number of expired records removed
    /// * `Err(DomainError)` - If cleanup fails
    pub async fn run_cleanup(&self) -> Result<usize, DomainError> {
        if !self.config.enabled {
            return Ok(0);
        }

        let removed = self.repository.delete_expired(Utc::now()).await?;
        if removed > 0 {
            info!("Removed {} expired OTP records", removed);
        }
        Ok(removed)
    }

    /// Start the cleanup service as a background task
    ///
    /// This spawns a tokio task that runs cleanup at regular intervals
    pub fn start_background_task(self: Arc<Self>) {
        if !self.config.enabled {
            warn!("OTP cleanup service is disabled");
            return;
        }

        let interval = std::time::Duration::from_secs(self.config.interval_seconds);

        tokio::spawn(async move {
            info!(
                "OTP cleanup service started - will run every {} seconds",
                self.config.interval_seconds
            );

            let mut interval_timer = tokio::time::interval(interval);

            loop {
                interval_timer.tick().await;

                if let Err(e) = self.run_cleanup().await {
                    error!("OTP cleanup cycle failed: {}", e);
                }
            }
        });
    }
}

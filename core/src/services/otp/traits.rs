//! Traits for outbound delivery integration

use async_trait::async_trait;

use crate::domain::entities::otp_record::OtpPurpose;

/// Trait for the email delivery collaborator
///
/// Delivery is synchronous from the issuer's point of view: if `send_otp`
/// fails, the whole issuance fails.
#[async_trait]
pub trait MailerTrait: Send + Sync {
    /// Send a passcode to an address; returns a provider message id
    async fn send_otp(
        &self,
        email: &str,
        code: &str,
        purpose: OtpPurpose,
    ) -> Result<String, String>;
}

//! OTP service module for email-based verification flows
//!
//! This module provides the complete one-time-passcode workflow:
//! - Code issuance with single-active-record semantics
//! - Code verification with attempt tracking and one-time use
//! - Verified-identity lookup for dependent steps (e.g. password reset)
//! - Opaque identifier encoding for external callers
//! - Periodic reaping of expired records

mod cleanup;
mod config;
pub mod encoding;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use cleanup::{OtpCleanupConfig, OtpCleanupService};
pub use config::OtpServiceConfig;
pub use encoding::{decode_otp_id, encode_otp_id};
pub use service::OtpService;
pub use traits::MailerTrait;
pub use types::{IssueOtpResult, VerifyOtpResult};

//! Business services containing domain logic and use cases.

pub mod chat_memory;
pub mod otp;

// Re-export commonly used types
pub use chat_memory::{ChatMemory, ChatMemoryConfig};
pub use otp::{
    IssueOtpResult, MailerTrait, OtpCleanupConfig, OtpCleanupService, OtpService,
    OtpServiceConfig, VerifyOtpResult,
};

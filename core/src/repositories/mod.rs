//! Repository interfaces for data persistence abstraction.

pub mod otp;

// Re-export repository traits and implementations
pub use otp::{MockOtpRepository, OtpRepository};

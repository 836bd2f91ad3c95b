//! Configuration types for server subsystems.

mod chat;
mod otp;

pub use chat::ChatMemorySettings;
pub use otp::OtpSettings;

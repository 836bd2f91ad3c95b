//! Domain entities representing core business objects.

pub mod conversation;
pub mod otp_record;

// Placeholder for future entity modules
// pub mod tour;
// pub mod city;

// Re-export commonly used types
pub use conversation::{ChatMessage, ChatRole, ConversationSession};
pub use otp_record::{OtpPurpose, OtpRecord, CODE_LENGTH, DEFAULT_EXPIRATION_MINUTES, MAX_ATTEMPTS};

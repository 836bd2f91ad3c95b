//! In-memory conversation cache for the chatbot feature
//!
//! Process-lifetime, time-expiring key to message-history map. Gives the
//! chat feature short-term context without any persistence.

mod service;

#[cfg(test)]
mod tests;

pub use service::{ChatMemory, ChatMemoryConfig};

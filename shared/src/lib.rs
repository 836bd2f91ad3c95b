//! Shared utilities and common types for the Voyago server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Utility functions (email validation, etc.)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{ChatMemorySettings, OtpSettings};
pub use utils::email;

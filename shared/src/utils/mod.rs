//! Shared utility functions.

pub mod email;

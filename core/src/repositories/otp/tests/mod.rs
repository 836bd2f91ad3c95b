//! Tests for OTP repository implementations

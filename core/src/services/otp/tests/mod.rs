//! Tests for the OTP service

pub mod mocks;

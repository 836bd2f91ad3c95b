//! Tests for the conversation cache

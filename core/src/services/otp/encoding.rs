//! Opaque identifier encoding for OTP records
//!
//! External callers never see raw storage identifiers; they get a
//! reversible base64 wrapping instead. This is not a secret and defends
//! only against accidental raw-id exposure, not tampering.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use uuid::Uuid;

/// Encode a record identifier for external callers
pub fn encode_otp_id(id: Uuid) -> String {
    STANDARD.encode(id.to_string())
}

/// Decode an externally-supplied identifier
///
/// Returns `None` for malformed base64, non-UTF-8 payloads, or payloads
/// that are not a UUID. Never panics.
pub fn decode_otp_id(encoded: &str) -> Option<Uuid> {
    let bytes = STANDARD.decode(encoded).ok()?;
    let raw = String::from_utf8(bytes).ok()?;
    Uuid::parse_str(&raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for _ in 0..50 {
            let id = Uuid::new_v4();
            assert_eq!(decode_otp_id(&encode_otp_id(id)), Some(id));
        }
    }

    #[test]
    fn test_encoded_form_hides_raw_id() {
        let id = Uuid::new_v4();
        assert_ne!(encode_otp_id(id), id.to_string());
    }

    #[test]
    fn test_decode_rejects_malformed_input() {
        assert_eq!(decode_otp_id(""), None);
        assert_eq!(decode_otp_id("not base64!!!"), None);
        // Valid base64 but not a UUID payload
        assert_eq!(decode_otp_id(&STANDARD.encode("hello world")), None);
        // Valid base64 but not UTF-8 payload
        assert_eq!(decode_otp_id(&STANDARD.encode([0xffu8, 0xfe, 0xfd])), None);
    }
}

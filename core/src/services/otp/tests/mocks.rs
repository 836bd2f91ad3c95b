//! Mock implementations for testing the OTP service

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::entities::otp_record::OtpPurpose;
use crate::services::otp::traits::MailerTrait;

/// Mock mailer capturing delivered codes
pub struct MockMailer {
    pub sent_codes: Arc<Mutex<HashMap<String, String>>>,
    pub should_fail: bool,
}

impl MockMailer {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sent_codes: Arc::new(Mutex::new(HashMap::new())),
            should_fail,
        }
    }

    /// Last code delivered to an address
    pub fn sent_code(&self, email: &str) -> Option<String> {
        self.sent_codes.lock().unwrap().get(email).cloned()
    }
}

#[async_trait]
impl MailerTrait for MockMailer {
    async fn send_otp(
        &self,
        email: &str,
        code: &str,
        _purpose: OtpPurpose,
    ) -> Result<String, String> {
        if self.should_fail {
            return Err("SMTP connection refused".to_string());
        }
        self.sent_codes
            .lock()
            .unwrap()
            .insert(email.to_string(), code.to_string());
        Ok(format!("mock-msg-{}", uuid::Uuid::new_v4()))
    }
}

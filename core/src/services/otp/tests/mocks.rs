//! Mock implementations for testing the OTP services

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::services::otp::traits::NotifierTrait;

/// Mock notifier recording every delivered code
pub struct MockNotifier {
    pub sent: Mutex<HashMap<String, String>>,
    pub should_fail: bool,
    counter: AtomicU64,
}

impl MockNotifier {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sent: Mutex::new(HashMap::new()),
            should_fail,
            counter: AtomicU64::new(0),
        }
    }

    pub fn sent_code(&self, email: &str) -> Option<String> {
        self.sent.lock().unwrap().get(email).cloned()
    }

    pub fn sent_count(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NotifierTrait for MockNotifier {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        if self.should_fail {
            return Err("notifier unavailable".to_string());
        }
        self.sent
            .lock()
            .unwrap()
            .insert(email.to_string(), code.to_string());
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("mock-msg-{}", n))
    }
}

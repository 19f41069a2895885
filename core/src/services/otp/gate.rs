//! Per-email verification flags unlocking pickup submission.
//!
//! A flag is set by a successful OTP check and outlives the one-shot code
//! that produced it. It is itself one-shot: the pickup workflow consumes it
//! after a successful persist, so the next submission needs a fresh OTP
//! cycle.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::sync::RwLock;

use tracing::debug;

const SHARD_COUNT: usize = 16;

/// Concurrent set of currently verified emails
pub struct VerificationGate {
    shards: Vec<RwLock<HashSet<String>>>,
}

impl VerificationGate {
    pub fn new() -> Self {
        Self {
            shards: (0..SHARD_COUNT)
                .map(|_| RwLock::new(HashSet::new()))
                .collect(),
        }
    }

    fn shard(&self, email: &str) -> &RwLock<HashSet<String>> {
        let mut hasher = DefaultHasher::new();
        email.hash(&mut hasher);
        &self.shards[(hasher.finish() as usize) % SHARD_COUNT]
    }

    /// Set the verified flag for an email.
    pub fn mark_verified(&self, email: &str) {
        self.shard(email).write().unwrap().insert(email.to_string());
        debug!(event = "gate_opened", "Marked email as verified");
    }

    /// Whether the email is currently verified; false when absent.
    pub fn is_verified(&self, email: &str) -> bool {
        self.shard(email).read().unwrap().contains(email)
    }

    /// One-time use: clear the flag, reporting whether it was set.
    pub fn consume(&self, email: &str) -> bool {
        let consumed = self.shard(email).write().unwrap().remove(email);
        if consumed {
            debug!(event = "gate_consumed", "Consumed verification flag");
        }
        consumed
    }

    /// Administrative reset. Idempotent.
    pub fn clear(&self, email: &str) {
        self.shard(email).write().unwrap().remove(email);
    }
}

impl Default for VerificationGate {
    fn default() -> Self {
        Self::new()
    }
}

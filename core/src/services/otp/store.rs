//! Concurrent in-memory store for outstanding verification codes.
//!
//! One entry per email; issuing again overwrites. The map is sharded so
//! operations on different emails do not contend, and every operation is a
//! single mutation under one shard lock, which makes same-key operations
//! linearizable. No lock is ever held across I/O.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::RwLock;

use tracing::debug;

use crate::domain::entities::otp_entry::OtpEntry;

use super::config::OtpConfig;

const SHARD_COUNT: usize = 16;

/// Outcome of checking a candidate code against the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OtpCheckOutcome {
    /// Candidate matched; the entry has been consumed.
    Matched,

    /// Candidate did not match; the entry remains so the client may retry,
    /// unless a configured attempt cap ran out (`remaining_attempts` hits
    /// zero, entry removed).
    Mismatch { remaining_attempts: Option<u32> },

    /// The entry had expired and has been removed.
    Expired,

    /// No entry exists for this email.
    Missing,
}

/// Sharded concurrent map of outstanding verification codes, keyed by email
pub struct OtpStore {
    shards: Vec<RwLock<HashMap<String, OtpEntry>>>,
    ttl: chrono::Duration,
    max_attempts: Option<u32>,
}

impl OtpStore {
    pub fn new(config: &OtpConfig) -> Self {
        let shards = (0..SHARD_COUNT)
            .map(|_| RwLock::new(HashMap::new()))
            .collect();
        Self {
            shards,
            ttl: config.ttl(),
            max_attempts: config.max_attempts,
        }
    }

    fn shard(&self, email: &str) -> &RwLock<HashMap<String, OtpEntry>> {
        let mut hasher = DefaultHasher::new();
        email.hash(&mut hasher);
        &self.shards[(hasher.finish() as usize) % SHARD_COUNT]
    }

    /// Issue a fresh code for an email, overwriting (and thereby
    /// invalidating) any outstanding entry.
    pub fn issue(&self, email: &str) -> OtpEntry {
        let entry = OtpEntry::new(email.to_string(), self.ttl);
        self.shard(email)
            .write()
            .unwrap()
            .insert(email.to_string(), entry.clone());
        debug!(event = "otp_stored", expires_at = %entry.expires_at, "Stored verification code");
        entry
    }

    /// Check a candidate against the stored code.
    ///
    /// Expired entries are removed on access (lazy expiry). A matching
    /// candidate consumes the entry; a mismatch leaves it in place, except
    /// when the configured attempt cap is exhausted.
    pub fn check(&self, email: &str, candidate: &str) -> OtpCheckOutcome {
        let mut shard = self.shard(email).write().unwrap();

        let Some(entry) = shard.get_mut(email) else {
            return OtpCheckOutcome::Missing;
        };

        if entry.is_expired() {
            shard.remove(email);
            return OtpCheckOutcome::Expired;
        }

        if entry.matches(candidate) {
            shard.remove(email);
            return OtpCheckOutcome::Matched;
        }

        entry.attempts += 1;
        let remaining = self
            .max_attempts
            .map(|max| max.saturating_sub(entry.attempts));
        if remaining == Some(0) {
            shard.remove(email);
        }
        OtpCheckOutcome::Mismatch {
            remaining_attempts: remaining,
        }
    }

    /// Whether a live (non-expired) entry exists for this email.
    pub fn contains(&self, email: &str) -> bool {
        self.shard(email)
            .read()
            .unwrap()
            .get(email)
            .map(|entry| !entry.is_expired())
            .unwrap_or(false)
    }

    /// Remove an entry unconditionally. Idempotent.
    pub fn remove(&self, email: &str) {
        self.shard(email).write().unwrap().remove(email);
    }

    /// Remove the entry only if it still holds the given code.
    ///
    /// Rollback primitive for failed delivery: a concurrent re-issue has
    /// already replaced the code, and that newer entry must survive.
    pub fn remove_if_code(&self, email: &str, code: &str) -> bool {
        let mut shard = self.shard(email).write().unwrap();
        if shard.get(email).map(|entry| entry.code == code).unwrap_or(false) {
            shard.remove(email);
            true
        } else {
            false
        }
    }

    /// Delete every expired entry, returning how many were removed.
    pub fn sweep(&self) -> usize {
        let mut removed = 0;
        for shard in &self.shards {
            let mut map = shard.write().unwrap();
            let before = map.len();
            map.retain(|_, entry| !entry.is_expired());
            removed += before - map.len();
        }
        removed
    }

    /// Number of outstanding entries, expired or not.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|s| s.read().unwrap().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//! Background sweep of expired verification codes
//!
//! Lazy expiry on access keeps the store correct; the sweeper bounds memory
//! growth from codes that are issued and then abandoned.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use super::store::OtpStore;

/// Configuration for the OTP sweeper task
#[derive(Debug, Clone)]
pub struct OtpSweeperConfig {
    /// Seconds between sweeps; zero disables the task
    pub interval_seconds: u64,
}

impl Default for OtpSweeperConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 300,
        }
    }
}

/// Periodically removes expired entries from the store
pub struct OtpSweeper {
    store: Arc<OtpStore>,
    config: OtpSweeperConfig,
}

impl OtpSweeper {
    pub fn new(store: Arc<OtpStore>, config: OtpSweeperConfig) -> Self {
        Self { store, config }
    }

    /// Run a single sweep cycle, returning the number of entries removed.
    pub fn run_sweep(&self) -> usize {
        let removed = self.store.sweep();
        if removed > 0 {
            info!(
                event = "otp_sweep",
                removed = removed,
                "Removed expired verification codes"
            );
        } else {
            debug!(event = "otp_sweep", "No expired verification codes");
        }
        removed
    }

    /// Spawn the periodic sweep loop on the current runtime.
    ///
    /// Returns `None` when the interval is zero (sweeping disabled).
    pub fn spawn(self) -> Option<tokio::task::JoinHandle<()>> {
        if self.config.interval_seconds == 0 {
            return None;
        }
        let period = Duration::from_secs(self.config.interval_seconds);
        Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick fires immediately; skip it so startup stays quiet.
            interval.tick().await;
            loop {
                interval.tick().await;
                self.run_sweep();
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::otp::config::OtpConfig;

    #[tokio::test]
    async fn test_run_sweep_reports_removed_count() {
        let store = Arc::new(OtpStore::new(&OtpConfig {
            ttl_minutes: 0,
            ..OtpConfig::default()
        }));
        store.issue("a@x.com");
        store.issue("b@y.com");
        tokio::time::sleep(Duration::from_millis(10)).await;

        let sweeper = OtpSweeper::new(Arc::clone(&store), OtpSweeperConfig::default());
        assert_eq!(sweeper.run_sweep(), 2);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_zero_interval_disables_the_task() {
        let store = Arc::new(OtpStore::new(&OtpConfig::default()));
        let sweeper = OtpSweeper::new(
            store,
            OtpSweeperConfig {
                interval_seconds: 0,
            },
        );
        assert!(sweeper.spawn().is_none());
    }
}

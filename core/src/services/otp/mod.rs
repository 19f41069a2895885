//! Email OTP verification module
//!
//! A short-lived, single-use secret tied to an email address gates pickup
//! submission:
//! - `OtpStore` holds at most one outstanding code per email, with expiry
//! - `OtpService` issues codes and delegates delivery to a notifier
//! - `VerificationGate` keeps the per-email verified flag between the
//!   successful check and its consumption by the pickup workflow
//! - `OtpSweeper` bounds memory by removing abandoned codes periodically

mod config;
mod gate;
mod service;
mod store;
mod sweeper;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::OtpConfig;
pub use gate::VerificationGate;
pub use service::OtpService;
pub use store::{OtpCheckOutcome, OtpStore};
pub use sweeper::{OtpSweeper, OtpSweeperConfig};
pub use traits::NotifierTrait;
pub use types::{OtpStatus, SendOtpResult};

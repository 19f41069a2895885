//! Business services containing domain logic and use cases.

pub mod otp;
pub mod pickup;
pub mod user;
pub mod wallet;

// Re-export commonly used types
pub use otp::{
    NotifierTrait, OtpCheckOutcome, OtpConfig, OtpService, OtpStatus, OtpStore, OtpSweeper,
    OtpSweeperConfig, SendOtpResult, VerificationGate,
};
pub use pickup::{PickupService, PickupSubmission};
pub use user::UserService;
pub use wallet::WalletService;

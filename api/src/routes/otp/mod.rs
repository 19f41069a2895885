//! OTP verification endpoints

pub mod clear;
pub mod send;
pub mod status;
pub mod verify;

pub use clear::clear_otp;
pub use send::send_otp;
pub use status::otp_status;
pub use verify::verify_otp;

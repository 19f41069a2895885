//! HTTP route handlers

pub mod otp;
pub mod pickup;
pub mod users;
pub mod wallet;

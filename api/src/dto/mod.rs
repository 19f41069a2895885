//! Request and response data transfer objects

pub mod otp;
pub mod pickup;
pub mod user;

mod otp_entry_tests;
mod pickup_tests;

//! Pickup request endpoints

pub mod queries;
pub mod submit;
pub mod update_status;

pub use queries::{get_pickup, list_pickups, list_pickups_by_email};
pub use submit::submit_pickup;
pub use update_status::update_pickup_status;

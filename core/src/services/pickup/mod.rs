//! Pickup submission workflow and administrative transitions

mod service;
mod types;

#[cfg(test)]
mod tests;

pub use service::PickupService;
pub use types::PickupSubmission;

//! MySQL repository implementations

pub mod pickup_repository_impl;
pub mod user_repository_impl;
pub mod wallet_repository_impl;

pub use pickup_repository_impl::MySqlPickupRepository;
pub use user_repository_impl::MySqlUserRepository;
pub use wallet_repository_impl::MySqlWalletRepository;

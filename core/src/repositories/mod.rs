pub mod pickup;
pub mod user;
pub mod wallet;

pub use pickup::{InMemoryPickupRepository, PickupRepository};
pub use user::{InMemoryUserRepository, UserRepository};
pub use wallet::{InMemoryWalletRepository, WalletRepository};

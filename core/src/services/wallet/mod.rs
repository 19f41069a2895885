//! Carbon wallet service

mod service;

pub use service::WalletService;

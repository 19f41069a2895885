//! User registration service

mod service;

pub use service::UserService;

//! Shared fixtures for the API integration tests

use std::sync::Arc;

use actix_web::web;

use sr_api::app::AppState;
use sr_core::repositories::{
    InMemoryPickupRepository, InMemoryUserRepository, InMemoryWalletRepository,
};
use sr_core::services::otp::{OtpConfig, OtpService, OtpStore, VerificationGate};
use sr_core::services::pickup::PickupService;
use sr_core::services::user::UserService;
use sr_core::services::wallet::WalletService;
use sr_infra::email::{EmailNotifierAdapter, MockEmailService};

pub type TestState = web::Data<
    AppState<
        EmailNotifierAdapter,
        InMemoryPickupRepository,
        InMemoryWalletRepository,
        InMemoryUserRepository,
    >,
>;

/// Application state on in-memory stores with debug code exposure enabled,
/// so tests can complete the OTP cycle entirely over HTTP.
pub fn test_state() -> TestState {
    state_with(
        OtpConfig {
            expose_code_in_response: true,
            ..OtpConfig::default()
        },
        false,
    )
}

pub fn state_with(config: OtpConfig, notifier_fails: bool) -> TestState {
    let store = Arc::new(OtpStore::new(&config));
    let gate = Arc::new(VerificationGate::new());
    let email = Arc::new(MockEmailService::with_options(false, notifier_fails));
    let notifier = Arc::new(EmailNotifierAdapter::new(email));

    web::Data::new(AppState {
        otp_service: Arc::new(OtpService::new(notifier, store, Arc::clone(&gate), config)),
        pickup_service: Arc::new(PickupService::new(
            Arc::new(InMemoryPickupRepository::new()),
            gate,
        )),
        wallet_service: Arc::new(WalletService::new(Arc::new(InMemoryWalletRepository::new()))),
        user_service: Arc::new(UserService::new(Arc::new(InMemoryUserRepository::new()))),
    })
}

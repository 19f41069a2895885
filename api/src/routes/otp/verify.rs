use actix_web::{web, HttpResponse};
use log::info;

use sr_core::repositories::{PickupRepository, UserRepository, WalletRepository};
use sr_core::services::otp::NotifierTrait;
use sr_infra::email::mask_email;
use sr_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::otp::VerifyOtpQuery;
use crate::handlers::error::domain_error_response;

/// Handler for POST /api/otp/verify?email=&otp=
///
/// Checks the submitted code. On success the email's verification flag is
/// set and the code is consumed; a wrong code leaves the code in place for
/// a retry.
pub async fn verify_otp<N, P, W, U>(
    state: web::Data<AppState<N, P, W, U>>,
    query: web::Query<VerifyOtpQuery>,
) -> HttpResponse
where
    N: NotifierTrait + 'static,
    P: PickupRepository + 'static,
    W: WalletRepository + 'static,
    U: UserRepository + 'static,
{
    info!(
        "Processing OTP verify request for {}",
        mask_email(&query.email)
    );

    match state.otp_service.verify_otp(&query.email, &query.otp) {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::message_only("OTP verified successfully")),
        Err(error) => domain_error_response(&error),
    }
}

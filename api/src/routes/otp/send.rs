use actix_web::{web, HttpResponse};
use log::info;

use sr_core::repositories::{PickupRepository, UserRepository, WalletRepository};
use sr_core::services::otp::NotifierTrait;
use sr_infra::email::mask_email;
use sr_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::otp::{EmailQuery, SendOtpResponse};
use crate::handlers::error::domain_error_response;

/// Handler for POST /api/otp/send?email=
///
/// Issues a fresh verification code for the email and hands it to the
/// notifier for delivery. Re-issuing overwrites any outstanding code.
pub async fn send_otp<N, P, W, U>(
    state: web::Data<AppState<N, P, W, U>>,
    query: web::Query<EmailQuery>,
) -> HttpResponse
where
    N: NotifierTrait + 'static,
    P: PickupRepository + 'static,
    W: WalletRepository + 'static,
    U: UserRepository + 'static,
{
    info!("Processing OTP send request for {}", mask_email(&query.email));

    match state.otp_service.request_otp(&query.email).await {
        Ok(result) => HttpResponse::Ok().json(ApiResponse::success_with_message(
            SendOtpResponse {
                message_id: result.message_id,
                expires_at: result.expires_at,
                otp: result.debug_code,
            },
            format!("OTP sent to {}", query.email),
        )),
        Err(error) => domain_error_response(&error),
    }
}

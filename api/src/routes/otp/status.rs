use actix_web::{web, HttpResponse};

use sr_core::repositories::{PickupRepository, UserRepository, WalletRepository};
use sr_core::services::otp::NotifierTrait;
use sr_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::otp::{EmailQuery, OtpStatusResponse};

/// Handler for GET /api/otp/status?email=
///
/// Reports whether the email is currently verified and whether a live code
/// is outstanding.
pub async fn otp_status<N, P, W, U>(
    state: web::Data<AppState<N, P, W, U>>,
    query: web::Query<EmailQuery>,
) -> HttpResponse
where
    N: NotifierTrait + 'static,
    P: PickupRepository + 'static,
    W: WalletRepository + 'static,
    U: UserRepository + 'static,
{
    let status = state.otp_service.status(&query.email);
    HttpResponse::Ok().json(ApiResponse::success(OtpStatusResponse {
        email: query.email.clone(),
        verified: status.verified,
        has_otp: status.has_otp,
    }))
}

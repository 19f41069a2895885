use actix_web::{web, HttpResponse};
use log::info;

use sr_core::repositories::{PickupRepository, UserRepository, WalletRepository};
use sr_core::services::otp::NotifierTrait;
use sr_infra::email::mask_email;
use sr_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::otp::EmailQuery;

/// Handler for POST /api/otp/clear?email=
///
/// Administrative reset of both the outstanding code and the verified flag.
/// Idempotent.
pub async fn clear_otp<N, P, W, U>(
    state: web::Data<AppState<N, P, W, U>>,
    query: web::Query<EmailQuery>,
) -> HttpResponse
where
    N: NotifierTrait + 'static,
    P: PickupRepository + 'static,
    W: WalletRepository + 'static,
    U: UserRepository + 'static,
{
    info!("Clearing verification state for {}", mask_email(&query.email));

    state.otp_service.clear(&query.email);
    HttpResponse::Ok().json(ApiResponse::message_only(format!(
        "Verification cleared for {}",
        query.email
    )))
}

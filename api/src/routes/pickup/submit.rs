use actix_web::{web, HttpResponse};
use log::info;

use sr_core::repositories::{PickupRepository, UserRepository, WalletRepository};
use sr_core::services::otp::NotifierTrait;
use sr_infra::email::mask_email;
use sr_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::pickup::CreatePickupRequest;
use crate::handlers::error::domain_error_response;

/// Handler for POST /api/pickup/request
///
/// Runs the submission workflow: verification-gate check, ordered field
/// validation, persistence with PENDING status, and one-time consumption of
/// the verification flag.
pub async fn submit_pickup<N, P, W, U>(
    state: web::Data<AppState<N, P, W, U>>,
    body: web::Json<CreatePickupRequest>,
) -> HttpResponse
where
    N: NotifierTrait + 'static,
    P: PickupRepository + 'static,
    W: WalletRepository + 'static,
    U: UserRepository + 'static,
{
    info!(
        "Processing pickup submission for {}",
        mask_email(&body.email)
    );

    match state.pickup_service.submit(body.into_inner().into()).await {
        Ok(pickup) => HttpResponse::Ok().json(ApiResponse::success_with_message(
            pickup,
            "Pickup request submitted successfully",
        )),
        Err(error) => domain_error_response(&error),
    }
}

//! User registration endpoint

use actix_web::{web, HttpResponse};
use log::info;

use sr_core::repositories::{PickupRepository, UserRepository, WalletRepository};
use sr_core::services::otp::NotifierTrait;
use sr_infra::email::mask_email;
use sr_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::user::{RegisterRequest, UserResponse};
use crate::handlers::error::domain_error_response;

/// Handler for POST /api/users/register
///
/// Registers a new user. Duplicate emails are rejected with 409.
pub async fn register_user<N, P, W, U>(
    state: web::Data<AppState<N, P, W, U>>,
    body: web::Json<RegisterRequest>,
) -> HttpResponse
where
    N: NotifierTrait + 'static,
    P: PickupRepository + 'static,
    W: WalletRepository + 'static,
    U: UserRepository + 'static,
{
    info!("Processing registration for {}", mask_email(&body.email));

    match state
        .user_service
        .register(&body.name, &body.email, &body.password)
        .await
    {
        Ok(user) => HttpResponse::Ok().json(ApiResponse::success_with_message(
            UserResponse::from(user),
            "User registered successfully",
        )),
        Err(error) => domain_error_response(&error),
    }
}

//! Carbon wallet endpoints

use actix_web::{web, HttpResponse};
use log::info;

use sr_core::repositories::{PickupRepository, UserRepository, WalletRepository};
use sr_core::services::otp::NotifierTrait;
use sr_shared::types::ApiResponse;

use crate::app::AppState;
use crate::handlers::error::domain_error_response;

/// Handler for GET /api/wallet/{user_id}
///
/// Returns the user's wallet, creating an empty one on first access.
pub async fn get_wallet<N, P, W, U>(
    state: web::Data<AppState<N, P, W, U>>,
    path: web::Path<i64>,
) -> HttpResponse
where
    N: NotifierTrait + 'static,
    P: PickupRepository + 'static,
    W: WalletRepository + 'static,
    U: UserRepository + 'static,
{
    match state.wallet_service.get_or_create(path.into_inner()).await {
        Ok(wallet) => HttpResponse::Ok().json(ApiResponse::success(wallet)),
        Err(error) => domain_error_response(&error),
    }
}

/// Handler for POST /api/wallet/create/{user_id}
///
/// Explicitly creates a wallet; at most one wallet exists per user.
pub async fn create_wallet<N, P, W, U>(
    state: web::Data<AppState<N, P, W, U>>,
    path: web::Path<i64>,
) -> HttpResponse
where
    N: NotifierTrait + 'static,
    P: PickupRepository + 'static,
    W: WalletRepository + 'static,
    U: UserRepository + 'static,
{
    let user_id = path.into_inner();
    info!("Creating wallet for user {}", user_id);

    match state.wallet_service.create(user_id).await {
        Ok(wallet) => HttpResponse::Ok().json(ApiResponse::success_with_message(
            wallet,
            "Wallet created successfully",
        )),
        Err(error) => domain_error_response(&error),
    }
}

use actix_web::{web, HttpResponse};

use sr_core::repositories::{PickupRepository, UserRepository, WalletRepository};
use sr_core::services::otp::NotifierTrait;
use sr_shared::types::ApiResponse;

use crate::app::AppState;
use crate::handlers::error::domain_error_response;

/// Handler for GET /api/pickup/requests
pub async fn list_pickups<N, P, W, U>(state: web::Data<AppState<N, P, W, U>>) -> HttpResponse
where
    N: NotifierTrait + 'static,
    P: PickupRepository + 'static,
    W: WalletRepository + 'static,
    U: UserRepository + 'static,
{
    match state.pickup_service.list_all().await {
        Ok(pickups) => HttpResponse::Ok().json(ApiResponse::success(pickups)),
        Err(error) => domain_error_response(&error),
    }
}

/// Handler for GET /api/pickup/requests/{id}
pub async fn get_pickup<N, P, W, U>(
    state: web::Data<AppState<N, P, W, U>>,
    path: web::Path<i64>,
) -> HttpResponse
where
    N: NotifierTrait + 'static,
    P: PickupRepository + 'static,
    W: WalletRepository + 'static,
    U: UserRepository + 'static,
{
    match state.pickup_service.get(path.into_inner()).await {
        Ok(pickup) => HttpResponse::Ok().json(ApiResponse::success(pickup)),
        Err(error) => domain_error_response(&error),
    }
}

/// Handler for GET /api/pickup/requests/email/{email}
pub async fn list_pickups_by_email<N, P, W, U>(
    state: web::Data<AppState<N, P, W, U>>,
    path: web::Path<String>,
) -> HttpResponse
where
    N: NotifierTrait + 'static,
    P: PickupRepository + 'static,
    W: WalletRepository + 'static,
    U: UserRepository + 'static,
{
    match state.pickup_service.list_by_email(&path.into_inner()).await {
        Ok(pickups) => HttpResponse::Ok().json(ApiResponse::success(pickups)),
        Err(error) => domain_error_response(&error),
    }
}

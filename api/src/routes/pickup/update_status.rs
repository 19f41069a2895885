use actix_web::{web, HttpResponse};
use log::info;

use sr_core::domain::entities::pickup::PickupStatus;
use sr_core::errors::DomainError;
use sr_core::repositories::{PickupRepository, UserRepository, WalletRepository};
use sr_core::services::otp::NotifierTrait;
use sr_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::pickup::StatusUpdateQuery;
use crate::handlers::error::domain_error_response;

/// Handler for PUT /api/pickup/requests/{id}/status?status=&notes=
///
/// Administrative transition to APPROVED, REJECTED or COMPLETED. Notes are
/// routed to admin or collector fields based on the target status.
pub async fn update_pickup_status<N, P, W, U>(
    state: web::Data<AppState<N, P, W, U>>,
    path: web::Path<i64>,
    query: web::Query<StatusUpdateQuery>,
) -> HttpResponse
where
    N: NotifierTrait + 'static,
    P: PickupRepository + 'static,
    W: WalletRepository + 'static,
    U: UserRepository + 'static,
{
    let id = path.into_inner();

    let status = match PickupStatus::parse(&query.status) {
        Ok(status) => status,
        Err(error) => {
            let error: DomainError = error.into();
            return domain_error_response(&error);
        }
    };

    info!("Updating pickup {} to status {}", id, status);

    match state
        .pickup_service
        .update_status(id, status, query.notes.clone())
        .await
    {
        Ok(pickup) => HttpResponse::Ok().json(ApiResponse::success_with_message(
            pickup,
            "Pickup status updated successfully",
        )),
        Err(error) => domain_error_response(&error),
    }
}

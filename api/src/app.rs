//! Application state and factory
//!
//! This module holds the shared service container and the factory that
//! assembles the Actix-web application with its routes and middleware.

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse};

use sr_core::repositories::{PickupRepository, UserRepository, WalletRepository};
use sr_core::services::otp::{NotifierTrait, OtpService};
use sr_core::services::pickup::PickupService;
use sr_core::services::user::UserService;
use sr_core::services::wallet::WalletService;
use sr_shared::types::ApiResponse;

use crate::middleware::cors::create_cors;
use crate::routes::otp::{clear_otp, otp_status, send_otp, verify_otp};
use crate::routes::pickup::{
    get_pickup, list_pickups, list_pickups_by_email, submit_pickup, update_pickup_status,
};
use crate::routes::users::register_user;
use crate::routes::wallet::{create_wallet, get_wallet};

/// Application state holding the shared services
pub struct AppState<N, P, W, U>
where
    N: NotifierTrait,
    P: PickupRepository,
    W: WalletRepository,
    U: UserRepository,
{
    pub otp_service: Arc<OtpService<N>>,
    pub pickup_service: Arc<PickupService<P>>,
    pub wallet_service: Arc<WalletService<W>>,
    pub user_service: Arc<UserService<U>>,
}

/// Create and configure the application with all dependencies
pub fn create_app<N, P, W, U>(
    app_state: web::Data<AppState<N, P, W, U>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    N: NotifierTrait + 'static,
    P: PickupRepository + 'static,
    W: WalletRepository + 'static,
    U: UserRepository + 'static,
{
    App::new()
        // Add application state
        .app_data(app_state)
        // Add middleware
        .wrap(Logger::default())
        .wrap(create_cors())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API routes
        .service(
            web::scope("/api")
                .service(
                    web::scope("/otp")
                        .route("/send", web::post().to(send_otp::<N, P, W, U>))
                        .route("/verify", web::post().to(verify_otp::<N, P, W, U>))
                        .route("/clear", web::post().to(clear_otp::<N, P, W, U>))
                        .route("/status", web::get().to(otp_status::<N, P, W, U>)),
                )
                .service(
                    web::scope("/pickup")
                        .route("/request", web::post().to(submit_pickup::<N, P, W, U>))
                        .route("/requests", web::get().to(list_pickups::<N, P, W, U>))
                        .route(
                            "/requests/email/{email}",
                            web::get().to(list_pickups_by_email::<N, P, W, U>),
                        )
                        .route("/requests/{id}", web::get().to(get_pickup::<N, P, W, U>))
                        .route(
                            "/requests/{id}/status",
                            web::put().to(update_pickup_status::<N, P, W, U>),
                        ),
                )
                .service(
                    web::scope("/wallet")
                        .route("/create/{user_id}", web::post().to(create_wallet::<N, P, W, U>))
                        .route("/{user_id}", web::get().to(get_wallet::<N, P, W, U>)),
                )
                .service(
                    web::scope("/users")
                        .route("/register", web::post().to(register_user::<N, P, W, U>)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "scraproute-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::error(
        "The requested resource was not found",
    ))
}

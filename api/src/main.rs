use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;

use sr_api::app::{create_app, AppState};
use sr_core::repositories::{
    InMemoryPickupRepository, InMemoryUserRepository, InMemoryWalletRepository, PickupRepository,
    UserRepository, WalletRepository,
};
use sr_core::services::otp::{
    NotifierTrait, OtpConfig, OtpService, OtpStore, OtpSweeper, OtpSweeperConfig, VerificationGate,
};
use sr_core::services::pickup::PickupService;
use sr_core::services::user::UserService;
use sr_core::services::wallet::WalletService;
use sr_infra::database::{
    create_pool, MySqlPickupRepository, MySqlUserRepository, MySqlWalletRepository,
};
use sr_infra::email::{
    EmailNotifierAdapter, EmailService, MockEmailService, SmtpConfig, SmtpEmailService,
};
use sr_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();
    info!(
        "Starting ScrapRoute API server ({} mode)",
        config.environment.as_str()
    );

    if config.otp.expose_code_in_response && config.environment.is_production() {
        anyhow::bail!("OTP_EXPOSE_CODE must not be enabled in production");
    }

    // OTP state is constructed once per process and injected everywhere
    let otp_config = OtpConfig::from(&config.otp);
    let store = Arc::new(OtpStore::new(&otp_config));
    let gate = Arc::new(VerificationGate::new());

    OtpSweeper::new(
        Arc::clone(&store),
        OtpSweeperConfig {
            interval_seconds: config.otp.sweep_interval_seconds,
        },
    )
    .spawn();

    // Pick the email delivery provider
    let email_service: Arc<dyn EmailService> = match SmtpConfig::from_env() {
        Some(smtp) => {
            info!("Email delivery via SMTP relay {}", smtp.host);
            Arc::new(SmtpEmailService::new(smtp)?)
        }
        None => {
            info!("SMTP not configured; verification codes print to the console");
            Arc::new(MockEmailService::new())
        }
    };
    let notifier = Arc::new(EmailNotifierAdapter::new(email_service));

    let bind_address = config.server.bind_address();
    let workers = config.server.workers;

    match &config.database {
        Some(database) => {
            let pool = create_pool(database).await?;
            let state = build_state(
                notifier,
                otp_config,
                store,
                gate,
                Arc::new(MySqlPickupRepository::new(pool.clone())),
                Arc::new(MySqlWalletRepository::new(pool.clone())),
                Arc::new(MySqlUserRepository::new(pool)),
            );
            serve(state, &bind_address, workers).await?;
        }
        None => {
            info!("DATABASE_URL not set; using in-memory repositories");
            let state = build_state(
                notifier,
                otp_config,
                store,
                gate,
                Arc::new(InMemoryPickupRepository::new()),
                Arc::new(InMemoryWalletRepository::new()),
                Arc::new(InMemoryUserRepository::new()),
            );
            serve(state, &bind_address, workers).await?;
        }
    }

    Ok(())
}

/// Wire the services into the shared application state.
fn build_state<N, P, W, U>(
    notifier: Arc<N>,
    otp_config: OtpConfig,
    store: Arc<OtpStore>,
    gate: Arc<VerificationGate>,
    pickups: Arc<P>,
    wallets: Arc<W>,
    users: Arc<U>,
) -> web::Data<AppState<N, P, W, U>>
where
    N: NotifierTrait + 'static,
    P: PickupRepository + 'static,
    W: WalletRepository + 'static,
    U: UserRepository + 'static,
{
    web::Data::new(AppState {
        otp_service: Arc::new(OtpService::new(
            notifier,
            store,
            Arc::clone(&gate),
            otp_config,
        )),
        pickup_service: Arc::new(PickupService::new(pickups, gate)),
        wallet_service: Arc::new(WalletService::new(wallets)),
        user_service: Arc::new(UserService::new(users)),
    })
}

async fn serve<N, P, W, U>(
    state: web::Data<AppState<N, P, W, U>>,
    bind_address: &str,
    workers: usize,
) -> std::io::Result<()>
where
    N: NotifierTrait + 'static,
    P: PickupRepository + 'static,
    W: WalletRepository + 'static,
    U: UserRepository + 'static,
{
    info!("Server listening on {}", bind_address);

    let mut server = HttpServer::new(move || create_app(state.clone()));
    if workers > 0 {
        server = server.workers(workers);
    }
    server.bind(bind_address)?.run().await
}

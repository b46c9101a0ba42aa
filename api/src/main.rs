use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use dotenv::dotenv;
use log::info;
use tracing_subscriber::EnvFilter;

use ic_core::services::verification::{VerificationService, VerificationServiceConfig};
use ic_infra::database::create_pool;
use ic_infra::database::mysql::{MySqlProfileRepository, MySqlVerificationRepository};
use ic_infra::email::{create_email_service, EmailSenderAdapter};

use ic_api::config::load_config;
use ic_api::dto::ErrorResponse;
use ic_api::middleware::cors::create_cors;
use ic_api::routes::verification::{send_code, verify_code, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logging; `log` records from the api crate are captured
    // through the tracing-log bridge
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting IIT Connect verification API");

    let config = load_config().expect("configuration must load from environment");
    let bind_address = config.server.bind_address();

    // Wire the dependency graph: MySQL-backed stores, the configured email
    // provider, and the verification service over them.
    let pool = create_pool(&config.database)
        .await
        .expect("database pool must initialize");

    let verification_repo = Arc::new(MySqlVerificationRepository::new(pool.clone()));
    let profile_repo = Arc::new(MySqlProfileRepository::new(pool));

    let email_service = create_email_service(&config.email).expect("email service must initialize");
    let email_sender = Arc::new(EmailSenderAdapter::new(Arc::from(email_service)));

    let service_config = VerificationServiceConfig {
        resend_cooldown_seconds: config.rate_limit.resend_cooldown_seconds,
        ..Default::default()
    };
    let verification_service = Arc::new(VerificationService::new(
        email_sender,
        verification_repo,
        profile_repo,
        service_config,
    ));

    let app_state = web::Data::new(AppState {
        verification_service,
    });

    info!("Server will bind to: {}", bind_address);

    let workers = config.server.workers;

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Logger::default())
            .wrap(create_cors())
            // Health check endpoint
            .route("/health", web::get().to(health_check))
            // API v1 routes
            .service(
                web::scope("/api/v1").service(
                    web::scope("/verification")
                        .route(
                            "/send-code",
                            web::post().to(send_code::<
                                EmailSenderAdapter,
                                MySqlVerificationRepository,
                                MySqlProfileRepository,
                            >),
                        )
                        .route(
                            "/verify-code",
                            web::post().to(verify_code::<
                                EmailSenderAdapter,
                                MySqlVerificationRepository,
                                MySqlProfileRepository,
                            >),
                        ),
                ),
            )
            // Default 404 handler
            .default_service(web::route().to(not_found))
    });

    let server = if workers > 0 {
        server.workers(workers)
    } else {
        server
    };

    server.bind(&bind_address)?.run().await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "iit-connect-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("The requested resource was not found"))
}

mod config;
mod database;
mod handlers;
mod logging;
mod models;

use crate::config::Settings;
use crate::database::{create_pool, ping};
use crate::handlers::AppState;
use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env before reading configuration
    dotenvy::dotenv().ok();

    let settings = Settings::new().expect("Failed to load configuration");

    logging::init_logging("info").expect("Failed to initialize logging");

    info!("Clinic directory API starting...");

    let pool = create_pool(&settings);

    // Liveness probe. A failure is logged and the server starts anyway;
    // data endpoints answer 500 until the database becomes reachable.
    match ping(&pool).await {
        Ok(()) => info!("Connected to MySQL database"),
        Err(e) => error!("Database connection error: {}", e),
    }

    let app_state = web::Data::new(AppState { pool });

    info!("Starting server on port {}", settings.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(app_state.clone())
            // Health check
            .route("/health", web::get().to(handlers::health_check))
            // Patient routes
            .route("/patients", web::get().to(handlers::list_patients))
            .route("/patients/filter", web::get().to(handlers::filter_patients))
            // Provider routes
            .route("/providers", web::get().to(handlers::list_providers))
            .route(
                "/providers/specialty",
                web::get().to(handlers::providers_by_specialty),
            )
    })
    .bind(("0.0.0.0", settings.port))?
    .run()
    .await
}

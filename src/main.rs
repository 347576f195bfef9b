use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use govme_schemes::config::Settings;
use govme_schemes::core::EligibilityEngine;
use govme_schemes::routes::{self, handle_json_payload_error, AppState};
use govme_schemes::services::{CatalogClient, TaxCalculatorClient};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn io_error(context: &str, e: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, format!("{}: {}", context, e))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| io_error("Configuration error", e))?;

    // Initialize logging (LOG_LEVEL / LOG_FORMAT win over the config file)
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Gov&Me scheme finder service...");
    info!("Configuration loaded successfully");

    let catalog = Arc::new(
        CatalogClient::new(
            settings.catalog.url,
            settings.catalog.anon_key,
            settings.catalog.table,
            settings.catalog.timeout_secs,
        )
        .map_err(|e| io_error("Catalog client error", e))?,
    );

    info!("Catalog client initialized");

    let tax_calculator = Arc::new(
        TaxCalculatorClient::new(settings.tax_service.endpoint, settings.tax_service.timeout_secs)
            .map_err(|e| io_error("Tax calculator client error", e))?,
    );

    let engine = EligibilityEngine::new(settings.matching.tag_policy);

    info!("Eligibility engine initialized with {:?} tag matching", engine.policy());

    let app_state = AppState {
        catalog,
        tax_calculator,
        engine,
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}

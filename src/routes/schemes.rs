use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{EligibilityEngine, FilterPanel, FinderSession};
use crate::models::{CatalogResponse, ErrorResponse, EvaluateRequest, FilterOptions, HealthResponse};
use crate::services::{CatalogClient, TaxCalculatorClient};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogClient>,
    pub tax_calculator: Arc<TaxCalculatorClient>,
    pub engine: EligibilityEngine,
}

/// Configure all scheme-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/schemes", web::get().to(list_schemes))
        .route("/schemes/filters", web::get().to(filter_options))
        .route("/schemes/evaluate", web::post().to(evaluate_schemes));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Selectable values for the filter controls
///
/// GET /api/v1/schemes/filters
async fn filter_options() -> impl Responder {
    HttpResponse::Ok().json(FilterOptions::standard())
}

/// Full catalog listing
///
/// GET /api/v1/schemes
async fn list_schemes(state: web::Data<AppState>) -> impl Responder {
    let mut session = FinderSession::new(state.engine, FilterPanel::default());
    let catalog_status = session.activate(state.catalog.as_ref()).await.clone();

    HttpResponse::Ok().json(CatalogResponse {
        schemes: session.catalog().to_vec(),
        count: session.catalog().len(),
        catalog_status,
    })
}

/// Evaluate a profile against the catalog
///
/// POST /api/v1/schemes/evaluate
///
/// Request body:
/// ```json
/// {
///   "age": 25,
///   "gender": "All",
///   "categoryInterest": "All",
///   "occupation": "Any",
///   "incomeGroup": "All",
///   "edits": [{ "field": "occupation", "value": "Student" }]
/// }
/// ```
///
/// A catalog that cannot be loaded still answers 200, with zero matches and
/// `catalogStatus.state == "unavailable"`.
async fn evaluate_schemes(
    state: web::Data<AppState>,
    req: web::Json<EvaluateRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for evaluate request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let activation_id = uuid::Uuid::new_v4();
    let mut session = FinderSession::with_profile(state.engine, FilterPanel::default(), req.profile());

    tracing::debug!("Activation {} evaluating profile {:?}", activation_id, session.profile());

    session.activate(state.catalog.as_ref()).await;
    for edit in &req.edits {
        session.apply(*edit);
    }

    let snapshot = session.snapshot();

    tracing::info!(
        "Activation {}: {} of {} schemes match",
        activation_id,
        snapshot.count,
        session.catalog().len()
    );

    HttpResponse::Ok().json(snapshot)
}

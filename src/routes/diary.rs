use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{DiaryForm, ErrorResponse};
use crate::routes::schemes::AppState;

/// Configure financial diary routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/diary/analyze", web::post().to(analyze_diary));
}

/// Regime comparison for a financial diary
///
/// POST /api/v1/diary/analyze
///
/// The form is turned into the calculator's payload and its answer is
/// returned as is.
async fn analyze_diary(
    state: web::Data<AppState>,
    form: web::Json<DiaryForm>,
) -> impl Responder {
    if let Err(errors) = form.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let request = form.to_request();

    match state.tax_calculator.analyze(&request).await {
        Ok(response) => {
            tracing::info!(
                "Regime comparison done: best={} savings={}",
                response.summary.best_regime,
                response.summary.savings
            );
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            tracing::error!("Tax calculator request failed: {}", e);
            HttpResponse::BadGateway().json(ErrorResponse {
                error: "Failed to analyze diary".to_string(),
                message: e.to_string(),
                status_code: 502,
            })
        }
    }
}

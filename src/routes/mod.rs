// Route exports
pub mod diary;
pub mod errors;
pub mod schemes;

pub use errors::handle_json_payload_error;
pub use schemes::AppState;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(schemes::configure)
            .configure(diary::configure),
    );
}

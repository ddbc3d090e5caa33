// Route exports
pub mod api;

use actix_web::web;

pub use api::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1").configure(api::configure));
}

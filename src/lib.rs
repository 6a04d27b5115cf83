pub mod db;
pub mod engine;
pub mod handlers;
pub mod models;

use actix_web::web;

/// Mount the service routes; shared between `main` and the black-box tests.
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.route("/query", web::post().to(handlers::query::ask))
        .route("/rooms", web::get().to(handlers::data::get_rooms))
        .route("/bookings", web::get().to(handlers::data::get_bookings));
}

//! HTTP handlers and route configuration.

mod blogs;
mod health;

use actix_web::web;

/// Configure all application routes.
///
/// The literal paths (`/health`, `/create`) are registered before the
/// `/{id}` routes so they win the match.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .route("/", web::get().to(blogs::list))
        .route("/create", web::post().to(blogs::create))
        .route("/{id}", web::get().to(blogs::get_by_id))
        .route("/{id}", web::post().to(blogs::update))
        .route("/{id}", web::delete().to(blogs::delete));
}

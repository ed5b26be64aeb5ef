//! HTTP handlers and route configuration.

mod blog;
mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .route("/blog", web::get().to(blog::blog_info))
            // Post store operations
            .service(
                web::scope("/posts")
                    .route("", web::post().to(posts::create))
                    .route("", web::get().to(posts::list))
                    // Literal segments must precede the `{id}` matcher
                    .route("/mine", web::get().to(posts::mine))
                    .route("/lookup", web::get().to(posts::lookup))
                    .route("/{id}", web::get().to(posts::get_by_id))
                    .route("/{id}", web::put().to(posts::update))
                    .route("/{id}/publish", web::post().to(posts::publish)),
            ),
    );
}

//! Public endpoints serving the visitor-facing site. No authentication.

mod content;
mod health;
mod slideshow;
mod submit;

use actix_web::web;

/// Configure public root routes.
pub fn configure_public_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_health_routes)
        .configure(slideshow::configure_slideshow_routes)
        .configure(content::configure_content_routes)
        .configure(submit::configure_submit_routes);
}

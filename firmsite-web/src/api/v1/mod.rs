//! V1 version API routes
mod admin_user;
mod auth;
mod background_image;
mod consultation;
mod contact;
mod content;

use crate::middleware::{auth::Authentication, gate::AdminGate};
use actix_web::web;

/// Configure all v1 routes
pub fn configure_v1_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_public_routes)
        .configure(configure_protected_routes);
}

/// Configure v1 routes that don't require authentication
fn configure_public_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        format!("{}/login", auth::ROUTER_PREFIX).as_str(),
        web::post().to(auth::login),
    );
}

/// Everything else sits behind the session check and the admin gate.
fn configure_protected_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("")
            .wrap(AdminGate)
            .wrap(Authentication)
            .service(web::scope(auth::ROUTER_PREFIX).configure(auth::configure_routes))
            .service(web::scope(admin_user::ROUTER_PREFIX).configure(admin_user::configure_routes))
            .service(
                web::scope(background_image::ROUTER_PREFIX)
                    .configure(background_image::configure_routes),
            )
            .service(web::scope(contact::ROUTER_PREFIX).configure(contact::configure_routes))
            .service(
                web::scope(consultation::ROUTER_PREFIX).configure(consultation::configure_routes),
            )
            .service(web::scope(content::SERVICE_PREFIX).configure(content::configure_service_routes))
            .service(web::scope(content::EVENT_PREFIX).configure(content::configure_event_routes))
            .service(web::scope(content::POST_PREFIX).configure(content::configure_post_routes))
            .service(
                web::scope(content::COMMENT_PREFIX).configure(content::configure_comment_routes),
            ),
    );
}

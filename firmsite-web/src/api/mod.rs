//! Router module for handling all API routes

pub mod public;
pub mod v1;

use actix_web::web;

/// Configure the versioned admin API (mounted under the router prefix).
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(v1::configure_v1_routes);
}

/// Configure public root routes (not under the API router prefix).
///
/// # Notes
/// These serve the visitor-facing site: the slideshow feed, published
/// content lists, form submissions and health probes.
pub fn configure_public_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(public::configure_public_routes);
}

//! Public slideshow feed.
//!
//! Serves the active background images in display order plus the rotation
//! configuration both slideshow variants read. An empty set and a lookup
//! failure degrade to the same fallback-only payload; visitors never see an
//! error here.

use actix_web::{http::header, web, HttpResponse};
use firmsite_common::FSAppContext;
use firmsite_error::WebResult;
use firmsite_models::{
    domain::prelude::{SlideInfo, SlideshowFeed},
    settings::SlideshowConfig,
};
use firmsite_repository::BackgroundImageRepository;
use tracing::warn;

/// Configure public slideshow routes.
pub fn configure_slideshow_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/slideshow.json", web::get().to(get_slideshow));
}

async fn get_slideshow() -> WebResult<HttpResponse> {
    let config = get_slideshow_config().await;

    let slides = match BackgroundImageRepository::find_active_ordered().await {
        Ok(images) => images.into_iter().map(SlideInfo::from).collect(),
        Err(e) => {
            warn!(error = %e, "slideshow lookup failed, serving fallback only");
            Vec::new()
        }
    };

    let feed = SlideshowFeed {
        slides,
        interval_ms: config.interval_ms,
        compact_interval_ms: config.compact_interval_ms,
        fallback_image_url: config.fallback_image_url,
    };

    Ok(HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-cache"))
        .json(feed))
}

async fn get_slideshow_config() -> SlideshowConfig {
    let ctx = FSAppContext::instance().await;
    match ctx.settings() {
        Ok(settings) => settings.slideshow.clone(),
        Err(_) => SlideshowConfig::default(),
    }
}

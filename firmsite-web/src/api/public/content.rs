//! Published content feeds for the informational pages.

use actix_web::web;
use firmsite_error::WebResult;
use firmsite_models::{
    entities::prelude::{EventModel, PostModel, ServiceModel},
    web::WebResponse,
};
use firmsite_repository::PublishedContentRepository;

/// Configure public content routes.
pub fn configure_content_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/news.json", web::get().to(news))
        .route("/events.json", web::get().to(events))
        .route("/services.json", web::get().to(services));
}

async fn news() -> WebResult<WebResponse<Vec<PostModel>>> {
    Ok(WebResponse::ok(PublishedContentRepository::posts().await?))
}

async fn events() -> WebResult<WebResponse<Vec<EventModel>>> {
    Ok(WebResponse::ok(PublishedContentRepository::events().await?))
}

async fn services() -> WebResult<WebResponse<Vec<ServiceModel>>> {
    Ok(WebResponse::ok(
        PublishedContentRepository::services().await?,
    ))
}

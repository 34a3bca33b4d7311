//! Public form submission endpoints (contact and consultation).
//!
//! Validation failures and unparseable consultation dates are rejected
//! before any persistence call with a 400 carrying the reason.

use actix_web::web;
use actix_web_validator::Json;
use firmsite_error::{web::WebError, WebResult};
use firmsite_models::{
    domain::prelude::{NewConsultationRequest, NewContactSubmission},
    entities::prelude::{ConsultationRequest, ContactSubmission},
    web::WebResponse,
};
use firmsite_repository::CollectionRepository;
use sea_orm::IntoActiveModel;
use tracing::info;

/// Configure public submission routes.
pub fn configure_submit_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/contact", web::post().to(submit_contact))
        .route("/consultation", web::post().to(submit_consultation));
}

async fn submit_contact(payload: Json<NewContactSubmission>) -> WebResult<WebResponse<()>> {
    let record =
        CollectionRepository::<ContactSubmission>::insert(payload.into_inner().into_active_model())
            .await?;
    info!(id = record.id, "contact submission received");
    Ok(WebResponse::<()>::ok_empty())
}

async fn submit_consultation(payload: Json<NewConsultationRequest>) -> WebResult<WebResponse<()>> {
    let model = payload
        .into_inner()
        .into_normalized_active_model()
        .map_err(WebError::BadRequest)?;
    let record = CollectionRepository::<ConsultationRequest>::insert(model).await?;
    info!(id = record.id, "consultation request received");
    Ok(WebResponse::<()>::ok_empty())
}

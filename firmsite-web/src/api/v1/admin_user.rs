//! Admin allow-list management endpoints.
//!
//! Mutations invalidate the gate cache so verdicts never outlive the list
//! they were derived from.
//!
//! # Routes
//! - GET `/list`: all allow-list entries
//! - POST ``: create entry (subject defaults to the placeholder)
//! - PUT ``: partial update
//! - DELETE `/{id}`: delete entry

use crate::middleware::{gate::get_admin_gate_cache, RequestContext};
use actix_web::web;
use actix_web_validator::{Json, Path};
use firmsite_error::WebResult;
use firmsite_models::{
    cache::FSBaseCache,
    domain::prelude::{NewAdminUser, PathId, UpdateAdminUser},
    entities::prelude::{AdminUser, AdminUserModel},
    web::WebResponse,
};
use firmsite_repository::CollectionRepository;
use sea_orm::IntoActiveModel;
use tracing::warn;

pub(super) const ROUTER_PREFIX: &str = "/admin-user";

/// Configure allow-list management routes.
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/list", web::get().to(list))
        .route("", web::post().to(create))
        .route("", web::put().to(update))
        .route("/{id}", web::delete().to(remove));
}

async fn list(_ctx: RequestContext) -> WebResult<WebResponse<Vec<AdminUserModel>>> {
    Ok(WebResponse::ok(
        CollectionRepository::<AdminUser>::find_all().await?,
    ))
}

async fn create(
    _ctx: RequestContext,
    payload: Json<NewAdminUser>,
) -> WebResult<WebResponse<AdminUserModel>> {
    let record =
        CollectionRepository::<AdminUser>::insert(payload.into_inner().into_active_model()).await?;
    invalidate_gate_cache().await;
    Ok(WebResponse::ok(record))
}

async fn update(
    _ctx: RequestContext,
    payload: Json<UpdateAdminUser>,
) -> WebResult<WebResponse<AdminUserModel>> {
    let record =
        CollectionRepository::<AdminUser>::update(payload.into_inner().into_active_model()).await?;
    invalidate_gate_cache().await;
    Ok(WebResponse::ok(record))
}

async fn remove(_ctx: RequestContext, path: Path<PathId>) -> WebResult<WebResponse<()>> {
    CollectionRepository::<AdminUser>::delete(path.id).await?;
    invalidate_gate_cache().await;
    Ok(WebResponse::<()>::ok_empty())
}

/// Drop every cached gate verdict after an allow-list mutation.
async fn invalidate_gate_cache() {
    match get_admin_gate_cache().await {
        Ok(cache) => {
            if let Err(e) = cache.delete_all().await {
                warn!(error = %e, "failed to invalidate admin gate cache");
            }
        }
        Err(e) => warn!(error = %e, "failed to resolve admin gate cache"),
    }
}

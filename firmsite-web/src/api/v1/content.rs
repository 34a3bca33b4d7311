//! Generic collection editor endpoints.
//!
//! One set of handlers serves every content collection; the type parameters
//! pick the entity and its create/update payloads at registration time, so
//! adding a collection is a route block, not a new module.
//!
//! # Routes (per collection)
//! - GET `/list`: full listing, newest first
//! - POST ``: create from the editor form
//! - PUT ``: partial update keyed by id
//! - DELETE `/{id}`: delete record

use crate::middleware::RequestContext;
use actix_web::web;
use actix_web_validator::{Json, Path};
use firmsite_error::WebResult;
use firmsite_models::{
    domain::prelude::{
        NewComment, NewEvent, NewPost, NewService, PathId, UpdateComment, UpdateEvent, UpdatePost,
        UpdateService,
    },
    entities::prelude::{
        Comment, CommentActiveModel, Event, EventActiveModel, Post, PostActiveModel, Service,
        ServiceActiveModel,
    },
    web::WebResponse,
};
use firmsite_repository::{Collection, CollectionRepository};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, IntoActiveModel, PrimaryKeyTrait,
};
use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;

pub(super) const SERVICE_PREFIX: &str = "/service";
pub(super) const EVENT_PREFIX: &str = "/event";
pub(super) const POST_PREFIX: &str = "/post";
pub(super) const COMMENT_PREFIX: &str = "/comment";

pub(super) fn configure_service_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/list", web::get().to(list::<Service>))
        .route("", web::post().to(create::<Service, ServiceActiveModel, NewService>))
        .route("", web::put().to(update::<Service, ServiceActiveModel, UpdateService>))
        .route("/{id}", web::delete().to(remove::<Service>));
}

pub(super) fn configure_event_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/list", web::get().to(list::<Event>))
        .route("", web::post().to(create::<Event, EventActiveModel, NewEvent>))
        .route("", web::put().to(update::<Event, EventActiveModel, UpdateEvent>))
        .route("/{id}", web::delete().to(remove::<Event>));
}

pub(super) fn configure_post_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/list", web::get().to(list::<Post>))
        .route("", web::post().to(create::<Post, PostActiveModel, NewPost>))
        .route("", web::put().to(update::<Post, PostActiveModel, UpdatePost>))
        .route("/{id}", web::delete().to(remove::<Post>));
}

pub(super) fn configure_comment_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/list", web::get().to(list::<Comment>))
        .route("", web::post().to(create::<Comment, CommentActiveModel, NewComment>))
        .route("", web::put().to(update::<Comment, CommentActiveModel, UpdateComment>))
        .route("/{id}", web::delete().to(remove::<Comment>));
}

async fn list<E>(_ctx: RequestContext) -> WebResult<WebResponse<Vec<E::Model>>>
where
    E: Collection,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    E::Model: Serialize,
{
    let records = CollectionRepository::<E>::find_all().await?;
    Ok(WebResponse::ok(records))
}

async fn create<E, A, N>(_ctx: RequestContext, payload: Json<N>) -> WebResult<WebResponse<E::Model>>
where
    E: Collection,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    E::Model: IntoActiveModel<A> + Serialize,
    N: IntoActiveModel<A> + DeserializeOwned + Validate + 'static,
{
    let record =
        CollectionRepository::<E>::insert(payload.into_inner().into_active_model()).await?;
    Ok(WebResponse::ok(record))
}

async fn update<E, A, U>(_ctx: RequestContext, payload: Json<U>) -> WebResult<WebResponse<E::Model>>
where
    E: Collection,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    E::Model: IntoActiveModel<A> + Serialize,
    U: IntoActiveModel<A> + DeserializeOwned + Validate + 'static,
{
    let record =
        CollectionRepository::<E>::update(payload.into_inner().into_active_model()).await?;
    Ok(WebResponse::ok(record))
}

async fn remove<E>(_ctx: RequestContext, path: Path<PathId>) -> WebResult<WebResponse<()>>
where
    E: Collection,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    CollectionRepository::<E>::delete(path.id).await?;
    Ok(WebResponse::<()>::ok_empty())
}

//! Background image management endpoints.
//!
//! # Routes
//! - GET `/list`: all images in display order
//! - POST `/upload`: multipart upload of one or more images
//! - PUT ``: metadata update (title, description, link)
//! - POST `/reorder`: swap an image with its immediate neighbor
//! - PUT `/status`: activate/deactivate without deleting
//! - DELETE `/{id}`: delete record, then best-effort file removal

use crate::middleware::RequestContext;
use actix_multipart::Multipart;
use actix_web::web;
use actix_web_validator::{Json, Path};
use firmsite_common::FSAppContext;
use firmsite_error::{web::WebError, WebResult};
use firmsite_models::{
    constants::BACKGROUND_KEY_PREFIX,
    domain::prelude::{ChangeImageStatus, PathId, ReorderPayload, UpdateBackgroundImage},
    entities::prelude::{BackgroundImage, BackgroundImageActiveModel, BackgroundImageModel},
    web::WebResponse,
    ObjectStore,
};
use firmsite_repository::{
    background_image::plan_swap, BackgroundImageRepository, CollectionRepository,
};
use firmsite_utils::object_key;
use futures::{future::join_all, StreamExt};
use sea_orm::{ActiveValue::NotSet, IntoActiveModel, Set};
use std::sync::Arc;
use tracing::{info, warn};

pub(super) const ROUTER_PREFIX: &str = "/background-image";

/// Maximum allowed image size in bytes.
///
/// Enforced while reading the multipart stream, before any storage call.
const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Configure background image management routes.
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/list", web::get().to(list))
        .route("/upload", web::post().to(upload))
        .route("", web::put().to(update_metadata))
        .route("/reorder", web::post().to(reorder))
        .route("/status", web::put().to(change_status))
        .route("/{id}", web::delete().to(remove));
}

async fn list(_ctx: RequestContext) -> WebResult<WebResponse<Vec<BackgroundImageModel>>> {
    Ok(WebResponse::ok(
        BackgroundImageRepository::find_all_ordered().await?,
    ))
}

/// One accepted file of an upload batch.
struct UploadedImage {
    filename: String,
    bytes: Vec<u8>,
}

/// Upload one or more images. The whole batch is validated first; a single
/// oversized or non-image file rejects it before any storage call. Accepted
/// files are stored concurrently, then recorded appended to the sequence.
/// The batch is all-or-nothing: on any storage failure the already-stored
/// files are removed again (best-effort) and the error is surfaced once.
async fn upload(
    _ctx: RequestContext,
    multipart: Multipart,
) -> WebResult<WebResponse<Vec<BackgroundImageModel>>> {
    let files = read_image_batch(multipart).await?;

    let count = BackgroundImageRepository::count().await? as usize;
    let store = get_object_store().await?;

    let keyed: Vec<(String, UploadedImage)> = files
        .into_iter()
        .map(|file| {
            (
                object_key::generate(BACKGROUND_KEY_PREFIX, &file.filename),
                file,
            )
        })
        .collect();

    // One storage request per file, awaited jointly.
    let results = join_all(
        keyed
            .iter()
            .map(|(key, file)| store.put(key, file.bytes.clone())),
    )
    .await;

    let mut stored = Vec::with_capacity(results.len());
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(object) => stored.push(object),
            Err(e) => failures.push(e.to_string()),
        }
    }

    if !failures.is_empty() {
        // Compensate: drop the files that did make it.
        for object in &stored {
            if let Err(e) = store.remove(&object.key).await {
                warn!(key = %object.key, error = %e, "failed to clean up partial upload");
            }
        }
        return Err(WebError::InternalError(format!(
            "Upload failed for {} of {} files: {}",
            failures.len(),
            keyed.len(),
            failures.join("; ")
        )));
    }

    let mut created = Vec::with_capacity(stored.len());
    for (position, object) in stored.into_iter().enumerate() {
        let sequence = count + position;
        let record = CollectionRepository::<BackgroundImage>::insert(BackgroundImageActiveModel {
            id: NotSet,
            image_url: Set(object.public_url),
            object_key: Set(object.key),
            title: Set(Some(format!("Background {}", sequence + 1))),
            description: NotSet,
            link_url: NotSet,
            display_order: Set(sequence as i32),
            status: NotSet,
            created_at: NotSet,
            updated_at: NotSet,
        })
        .await?;
        created.push(record);
    }

    info!(count = created.len(), "background images uploaded");
    Ok(WebResponse::ok(created))
}

async fn update_metadata(
    _ctx: RequestContext,
    payload: Json<UpdateBackgroundImage>,
) -> WebResult<WebResponse<BackgroundImageModel>> {
    let record =
        CollectionRepository::<BackgroundImage>::update(payload.into_inner().into_active_model())
            .await?;
    Ok(WebResponse::ok(record))
}

/// Swap with the immediate neighbor as two independent updates. A boundary
/// move is a no-op returning the unchanged list; after a successful swap the
/// list is re-read so the caller always sees persisted state.
async fn reorder(
    _ctx: RequestContext,
    payload: Json<ReorderPayload>,
) -> WebResult<WebResponse<Vec<BackgroundImageModel>>> {
    let payload = payload.into_inner();
    let images = BackgroundImageRepository::find_all_ordered().await?;

    match plan_swap(&images, payload.id, payload.direction) {
        None => Ok(WebResponse::ok(images)),
        Some((target, neighbor)) => {
            BackgroundImageRepository::persist_swap(target, neighbor).await?;
            Ok(WebResponse::ok(
                BackgroundImageRepository::find_all_ordered().await?,
            ))
        }
    }
}

async fn change_status(
    _ctx: RequestContext,
    payload: Json<ChangeImageStatus>,
) -> WebResult<WebResponse<()>> {
    let payload = payload.into_inner();
    BackgroundImageRepository::set_status(payload.id, payload.status).await?;
    Ok(WebResponse::<()>::ok_empty())
}

/// Delete the record first; the stored file afterwards, best-effort. A file
/// that refuses to go is logged, not surfaced, since the record the UI
/// depends on is already gone.
async fn remove(_ctx: RequestContext, path: Path<PathId>) -> WebResult<WebResponse<()>> {
    let image = CollectionRepository::<BackgroundImage>::find_by_id(path.id)
        .await?
        .ok_or_else(|| WebError::NotFound("BackgroundImage".to_string()))?;

    CollectionRepository::<BackgroundImage>::delete(path.id).await?;

    let store = get_object_store().await?;
    if let Err(e) = store.remove(&image.object_key).await {
        warn!(key = %image.object_key, error = %e, "failed to remove stored image file");
    }

    Ok(WebResponse::<()>::ok_empty())
}

/// Read every file of the multipart batch into memory, enforcing MIME and
/// size limits per file. Rejections happen here, before any storage call.
async fn read_image_batch(mut multipart: Multipart) -> WebResult<Vec<UploadedImage>> {
    let mut files = Vec::new();

    while let Some(field) = multipart.next().await {
        let mut field = field?;

        let mime = field
            .content_type()
            .map(|m| m.to_string())
            .unwrap_or_default();
        if !mime.starts_with("image/") {
            return Err(WebError::BadRequest(format!(
                "Invalid content-type: `{}` (expected image/*)",
                if mime.is_empty() { "<empty>" } else { &mime }
            )));
        }

        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(String::from))
            .unwrap_or_else(|| "upload".to_string());

        // Read bytes with a hard limit to avoid memory abuse.
        let mut buf: Vec<u8> = Vec::new();
        let mut total: usize = 0;
        while let Some(chunk) = field.next().await {
            let data = chunk?;
            total = total.saturating_add(data.len());
            if total > MAX_IMAGE_BYTES {
                return Err(WebError::BadRequest(format!(
                    "File too large: {total} bytes (max {MAX_IMAGE_BYTES})"
                )));
            }
            buf.extend_from_slice(&data);
        }

        if buf.is_empty() {
            return Err(WebError::BadRequest("Empty file uploaded".to_string()));
        }

        files.push(UploadedImage {
            filename,
            bytes: buf,
        });
    }

    if files.is_empty() {
        return Err(WebError::BadRequest("No file uploaded".to_string()));
    }

    Ok(files)
}

#[inline]
async fn get_object_store() -> WebResult<Arc<dyn ObjectStore>> {
    FSAppContext::instance()
        .await
        .object_store()
        .map_err(|_| WebError::InternalError("Object store not initialized".to_string()))
}

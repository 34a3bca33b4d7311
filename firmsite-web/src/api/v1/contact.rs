//! Contact submission admin endpoints.
//!
//! # Routes
//! - GET `/page`: paginated listing with optional time range
//! - GET `/export`: spreadsheet download of the (optionally narrowed) set
//! - DELETE `/{id}`: delete submission

use crate::middleware::RequestContext;
use actix_web::{http::header, web, HttpResponse};
use actix_web_validator::{Path, Query};
use firmsite_error::{web::WebError, WebResult};
use firmsite_models::{
    domain::prelude::{ExportParams, PageResult, PathId, SubmissionPageParams},
    entities::prelude::{ContactSubmission, ContactSubmissionModel},
    web::WebResponse,
};
use firmsite_repository::{CollectionRepository, ContactSubmissionRepository};
use firmsite_utils::export::{
    export_filename, export_to_buffer, transforms, DateFilter, ExportColumn,
};
use firmsite_error::export::ExportError;

pub(super) const ROUTER_PREFIX: &str = "/contact";

const EXPORT_SHEET: &str = "Contact Submissions";
const EXPORT_BASE: &str = "contact_submissions";

const EXPORT_COLUMNS: &[ExportColumn] = &[
    ExportColumn::new("name", "Name"),
    ExportColumn::new("email", "Email"),
    ExportColumn::new("phone", "Phone"),
    ExportColumn::new("subject", "Subject"),
    ExportColumn::new("message", "Message"),
    ExportColumn::with_transform("created_at", "Submitted", transforms::date_time),
];

/// Configure contact submission routes.
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/page", web::get().to(page))
        .route("/export", web::get().to(export))
        .route("/{id}", web::delete().to(remove));
}

async fn page(
    _ctx: RequestContext,
    params: Query<SubmissionPageParams>,
) -> WebResult<WebResponse<PageResult<ContactSubmissionModel>>> {
    Ok(WebResponse::ok(
        ContactSubmissionRepository::page(params.into_inner()).await?,
    ))
}

/// Spreadsheet export. An empty surviving set is a warning response, not a
/// failure, so exporting an empty view never breaks the admin panel.
async fn export(_ctx: RequestContext, params: Query<ExportParams>) -> WebResult<HttpResponse> {
    let params = params.into_inner();
    let records = ContactSubmissionRepository::find_in_range(&params.time_range).await?;

    let filter = DateFilter::new(
        "created_at",
        params.time_range.start_time,
        params.time_range.end_time,
    );
    let rows: Vec<serde_json::Value> = records
        .into_iter()
        .map(|record| serde_json::to_value(record).unwrap_or_default())
        .collect();

    let bytes = match export_to_buffer(&rows, EXPORT_COLUMNS, EXPORT_SHEET, Some(&filter)) {
        Ok(bytes) => bytes,
        Err(ExportError::NoRecords) => {
            return Ok(HttpResponse::Ok().json(WebResponse::<()>::warning("no records to export")))
        }
        Err(e) => return Err(WebError::InternalError(e.to_string())),
    };

    let filename = export_filename(EXPORT_BASE, Some(&filter));
    Ok(HttpResponse::Ok()
        .insert_header((
            header::CONTENT_TYPE,
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        ))
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ))
        .body(bytes))
}

async fn remove(_ctx: RequestContext, path: Path<PathId>) -> WebResult<WebResponse<()>> {
    CollectionRepository::<ContactSubmission>::delete(path.id).await?;
    Ok(WebResponse::<()>::ok_empty())
}

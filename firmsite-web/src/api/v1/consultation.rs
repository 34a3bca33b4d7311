//! Consultation request admin endpoints.
//!
//! # Routes
//! - GET `/page`: paginated listing with optional time range
//! - GET `/export`: spreadsheet download of the (optionally narrowed) set
//! - DELETE `/{id}`: delete request

use crate::middleware::RequestContext;
use actix_web::{http::header, web, HttpResponse};
use actix_web_validator::{Path, Query};
use firmsite_error::export::ExportError;
use firmsite_error::{web::WebError, WebResult};
use firmsite_models::{
    domain::prelude::{ExportParams, PageResult, PathId, SubmissionPageParams},
    entities::prelude::{ConsultationRequest, ConsultationRequestModel},
    web::WebResponse,
};
use firmsite_repository::{CollectionRepository, ConsultationRequestRepository};
use firmsite_utils::export::{
    export_filename, export_to_buffer, transforms, DateFilter, ExportColumn,
};

pub(super) const ROUTER_PREFIX: &str = "/consultation";

const EXPORT_SHEET: &str = "Consultation Requests";
const EXPORT_BASE: &str = "consultation_requests";

const EXPORT_COLUMNS: &[ExportColumn] = &[
    ExportColumn::new("name", "Name"),
    ExportColumn::new("email", "Email"),
    ExportColumn::new("phone", "Phone"),
    ExportColumn::new("service", "Service"),
    ExportColumn::with_transform("preferred_date", "Preferred Date", transforms::date_only),
    ExportColumn::with_transform("alternate_date", "Alternate Date", transforms::date_only),
    ExportColumn::new("notes", "Notes"),
    ExportColumn::with_transform("created_at", "Submitted", transforms::date_time),
];

/// Configure consultation request routes.
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/page", web::get().to(page))
        .route("/export", web::get().to(export))
        .route("/{id}", web::delete().to(remove));
}

async fn page(
    _ctx: RequestContext,
    params: Query<SubmissionPageParams>,
) -> WebResult<WebResponse<PageResult<ConsultationRequestModel>>> {
    Ok(WebResponse::ok(
        ConsultationRequestRepository::page(params.into_inner()).await?,
    ))
}

/// Spreadsheet export; empty surviving set resolves to a warning response.
async fn export(_ctx: RequestContext, params: Query<ExportParams>) -> WebResult<HttpResponse> {
    let params = params.into_inner();
    let records = ConsultationRequestRepository::find_in_range(&params.time_range).await?;

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
    CollectionRepository::<ConsultationRequest>::delete(path.id).await?;
    Ok(WebResponse::<()>::ok_empty())
}

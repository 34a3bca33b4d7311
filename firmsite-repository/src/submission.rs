//! Repositories for contact and consultation submissions: paged listing
//! with an optional closed time interval, and the range fetch the exporter
//! works from.

use crate::get_db_connection;
use firmsite_error::StorageResult;
use firmsite_models::{
    domain::prelude::{PageResult, SubmissionPageParams, TimeRangeParams},
    entities::prelude::{
        ConsultationRequest, ConsultationRequestColumn, ConsultationRequestModel,
        ContactSubmission, ContactSubmissionColumn, ContactSubmissionModel,
    },
};
use sea_orm::{ColumnTrait, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder, QueryTrait};

pub struct ContactSubmissionRepository;

impl ContactSubmissionRepository {
    pub async fn page(params: SubmissionPageParams) -> StorageResult<PageResult<ContactSubmissionModel>> {
        let db = get_db_connection().await?;
        let query = ContactSubmission::find()
            .apply_if(params.time_range.start_time, |q, start_time| {
                q.filter(ContactSubmissionColumn::CreatedAt.gte(start_time))
            })
            .apply_if(params.time_range.end_time, |q, end_time| {
                q.filter(ContactSubmissionColumn::CreatedAt.lte(end_time))
            })
            .order_by(ContactSubmissionColumn::CreatedAt, Order::Desc);
        let (page, page_size) = (params.page.page.unwrap(), params.page.page_size.unwrap());
        let total = query.clone().count(&db).await?;
        let records = query
            .paginate(&db, page_size as u64)
            .fetch_page((page - 1) as u64)
            .await?;

        Ok(PageResult {
            records,
            total,
            pages: ((total as f64) / (page_size as f64)).ceil() as u32,
            page,
            page_size,
        })
    }

    /// All submissions inside the (possibly open-ended) interval, for export.
    pub async fn find_in_range(range: &TimeRangeParams) -> StorageResult<Vec<ContactSubmissionModel>> {
        let db = get_db_connection().await?;
        Ok(ContactSubmission::find()
            .apply_if(range.start_time, |q, start_time| {
                q.filter(ContactSubmissionColumn::CreatedAt.gte(start_time))
            })
            .apply_if(range.end_time, |q, end_time| {
                q.filter(ContactSubmissionColumn::CreatedAt.lte(end_time))
            })
            .order_by(ContactSubmissionColumn::CreatedAt, Order::Desc)
            .all(&db)
            .await?)
    }
}

pub struct ConsultationRequestRepository;

impl ConsultationRequestRepository {
    pub async fn page(
        params: SubmissionPageParams,
    ) -> StorageResult<PageResult<ConsultationRequestModel>> {
        let db = get_db_connection().await?;
        let query = ConsultationRequest::find()
            .apply_if(params.time_range.start_time, |q, start_time| {
                q.filter(ConsultationRequestColumn::CreatedAt.gte(start_time))
            })
            .apply_if(params.time_range.end_time, |q, end_time| {
                q.filter(ConsultationRequestColumn::CreatedAt.lte(end_time))
            })
            .order_by(ConsultationRequestColumn::CreatedAt, Order::Desc);
        let (page, page_size) = (params.page.page.unwrap(), params.page.page_size.unwrap());
        let total = query.clone().count(&db).await?;
        let records = query
            .paginate(&db, page_size as u64)
            .fetch_page((page - 1) as u64)
            .await?;

        Ok(PageResult {
            records,
            total,
            pages: ((total as f64) / (page_size as f64)).ceil() as u32,
            page,
            page_size,
        })
    }

    /// All requests inside the (possibly open-ended) interval, for export.
    pub async fn find_in_range(
        range: &TimeRangeParams,
    ) -> StorageResult<Vec<ConsultationRequestModel>> {
        let db = get_db_connection().await?;
        Ok(ConsultationRequest::find()
            .apply_if(range.start_time, |q, start_time| {
                q.filter(ConsultationRequestColumn::CreatedAt.gte(start_time))
            })
            .apply_if(range.end_time, |q, end_time| {
                q.filter(ConsultationRequestColumn::CreatedAt.lte(end_time))
            })
            .order_by(ConsultationRequestColumn::CreatedAt, Order::Desc)
            .all(&db)
            .await?)
    }
}

//! Read side of the public site: only published material, newest first.

use crate::get_db_connection;
use firmsite_error::StorageResult;
use firmsite_models::{
    entities::prelude::{
        Event, EventColumn, EventModel, Post, PostColumn, PostModel, Service, ServiceColumn,
        ServiceModel,
    },
    enums::common::Status,
};
use sea_orm::{ColumnTrait, EntityTrait, Order, QueryFilter, QueryOrder};

pub struct PublishedContentRepository;

impl PublishedContentRepository {
    pub async fn posts() -> StorageResult<Vec<PostModel>> {
        let db = get_db_connection().await?;
        Ok(Post::find()
            .filter(PostColumn::Published.eq(Status::Enabled))
            .order_by(PostColumn::CreatedAt, Order::Desc)
            .all(&db)
            .await?)
    }

    pub async fn events() -> StorageResult<Vec<EventModel>> {
        let db = get_db_connection().await?;
        Ok(Event::find()
            .order_by(EventColumn::StartsAt, Order::Desc)
            .order_by(EventColumn::CreatedAt, Order::Desc)
            .all(&db)
            .await?)
    }

    pub async fn services() -> StorageResult<Vec<ServiceModel>> {
        let db = get_db_connection().await?;
        Ok(Service::find()
            .order_by(ServiceColumn::Title, Order::Asc)
            .all(&db)
            .await?)
    }
}

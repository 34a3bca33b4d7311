//! Repository for slideshow background images.
//!
//! Beyond the generic CRUD this adds the ordered public fetch, append
//! positioning for uploads and the neighbor swap used by reordering. The
//! swap is two independent updates (no transaction); a failure between them
//! is recovered by the caller re-listing from source.

use crate::get_db_connection;
use firmsite_error::{storage::StorageError, StorageResult};
use firmsite_models::{
    domain::prelude::MoveDirection,
    entities::prelude::{
        BackgroundImage, BackgroundImageActiveModel, BackgroundImageColumn, BackgroundImageModel,
    },
    enums::common::{CollectionKind, Status},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

pub struct BackgroundImageRepository;

impl BackgroundImageRepository {
    /// Admin listing: full set in display order.
    pub async fn find_all_ordered() -> StorageResult<Vec<BackgroundImageModel>> {
        let db = get_db_connection().await?;
        Ok(BackgroundImage::find()
            .order_by(BackgroundImageColumn::DisplayOrder, Order::Asc)
            .order_by(BackgroundImageColumn::CreatedAt, Order::Desc)
            .all(&db)
            .await?)
    }

    /// Public feed: active images by display order, then recency.
    pub async fn find_active_ordered() -> StorageResult<Vec<BackgroundImageModel>> {
        let db = get_db_connection().await?;
        Ok(BackgroundImage::find()
            .filter(BackgroundImageColumn::Status.eq(Status::Enabled))
            .order_by(BackgroundImageColumn::DisplayOrder, Order::Asc)
            .order_by(BackgroundImageColumn::CreatedAt, Order::Desc)
            .all(&db)
            .await?)
    }

    /// Current image count; new uploads append after it.
    pub async fn count() -> StorageResult<u64> {
        let db = get_db_connection().await?;
        Ok(BackgroundImage::find().count(&db).await?)
    }

    pub async fn set_status(id: i32, status: Status) -> StorageResult<()> {
        let db = get_db_connection().await?;
        let _ = BackgroundImageActiveModel {
            id: Set(id),
            status: Set(status),
            ..Default::default()
        }
        .update(&db)
        .await
        .map_err(|e| match e {
            sea_orm::DbErr::RecordNotUpdated => {
                StorageError::EntityNotFound(CollectionKind::BackgroundImage.to_string())
            }
            other => StorageError::DBError(other),
        })?;
        Ok(())
    }

    /// Persist a swapped pair as two independent updates. Not atomic: the
    /// caller discards its optimistic state and re-lists on any failure.
    pub async fn persist_swap(
        first: &BackgroundImageModel,
        second: &BackgroundImageModel,
    ) -> StorageResult<()> {
        let db = get_db_connection().await?;
        let _ = BackgroundImageActiveModel {
            id: Set(first.id),
            display_order: Set(second.display_order),
            ..Default::default()
        }
        .update(&db)
        .await?;
        let _ = BackgroundImageActiveModel {
            id: Set(second.id),
            display_order: Set(first.display_order),
            ..Default::default()
        }
        .update(&db)
        .await?;
        Ok(())
    }
}

/// Pick the record pair to swap when moving `id` one step in `direction`
/// within `images` (already in display order). `None` at the boundary or
/// when `id` is absent; boundary moves are no-ops for the caller.
pub fn plan_swap(
    images: &[BackgroundImageModel],
    id: i32,
    direction: MoveDirection,
) -> Option<(&BackgroundImageModel, &BackgroundImageModel)> {
    let position = images.iter().position(|image| image.id == id)?;
    let neighbor = match direction {
        MoveDirection::Up => position.checked_sub(1)?,
        MoveDirection::Down => {
            let next = position + 1;
            if next >= images.len() {
                return None;
            }
            next
        }
    };
    Some((&images[position], &images[neighbor]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: i32, display_order: i32) -> BackgroundImageModel {
        BackgroundImageModel {
            id,
            image_url: format!("/uploads/bg/{id}.jpg"),
            object_key: format!("bg/{id}.jpg"),
            title: None,
            description: None,
            link_url: None,
            display_order,
            status: Status::Enabled,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn plan_swap_picks_the_immediate_neighbor() {
        let images = vec![image(10, 0), image(20, 5), image(30, 9)];
        let (target, neighbor) = plan_swap(&images, 20, MoveDirection::Up).unwrap();
        assert_eq!((target.id, neighbor.id), (20, 10));
        let (target, neighbor) = plan_swap(&images, 20, MoveDirection::Down).unwrap();
        assert_eq!((target.id, neighbor.id), (20, 30));
    }

    #[test]
    fn boundary_moves_are_no_ops() {
        let images = vec![image(10, 0), image(20, 5)];
        assert!(plan_swap(&images, 10, MoveDirection::Up).is_none());
        assert!(plan_swap(&images, 20, MoveDirection::Down).is_none());
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let images = vec![image(10, 0)];
        assert!(plan_swap(&images, 99, MoveDirection::Down).is_none());
    }

    #[test]
    fn swapping_exchanges_only_the_two_display_orders() {
        // The swap plan never touches other records; their orders stay put.
        let images = vec![image(10, 0), image(20, 5), image(30, 9)];
        let (target, neighbor) = plan_swap(&images, 30, MoveDirection::Up).unwrap();
        assert_eq!((target.display_order, neighbor.display_order), (9, 5));
        assert_eq!(images[0].display_order, 0);
    }
}

//! Generic access layer for admin-managed collections.
//!
//! One repository serves every collection: fetch-all, insert, update-by-id
//! and delete-by-id against the entity named by the type parameter. All
//! operations are fresh round trips; no retries, no caching, and the remote
//! error text reaches the caller unchanged. The UI stays schema-agnostic by
//! driving this through per-collection DTOs only.

use crate::get_db_connection;
use firmsite_error::{storage::StorageError, StorageResult};
use firmsite_models::enums::common::CollectionKind;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DbErr, EntityTrait, IntoActiveModel, Iterable,
    PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder,
};
use std::marker::PhantomData;

/// Entities manageable through the generic editor.
pub trait Collection: EntityTrait {
    const KIND: CollectionKind;
}

impl Collection for firmsite_models::entities::prelude::Service {
    const KIND: CollectionKind = CollectionKind::Service;
}

impl Collection for firmsite_models::entities::prelude::Event {
    const KIND: CollectionKind = CollectionKind::Event;
}

impl Collection for firmsite_models::entities::prelude::Post {
    const KIND: CollectionKind = CollectionKind::Post;
}

impl Collection for firmsite_models::entities::prelude::Comment {
    const KIND: CollectionKind = CollectionKind::Comment;
}

impl Collection for firmsite_models::entities::prelude::ContactSubmission {
    const KIND: CollectionKind = CollectionKind::ContactSubmission;
}

impl Collection for firmsite_models::entities::prelude::ConsultationRequest {
    const KIND: CollectionKind = CollectionKind::ConsultationRequest;
}

impl Collection for firmsite_models::entities::prelude::BackgroundImage {
    const KIND: CollectionKind = CollectionKind::BackgroundImage;
}

impl Collection for firmsite_models::entities::prelude::AdminUser {
    const KIND: CollectionKind = CollectionKind::AdminUser;
}

pub struct CollectionRepository<E: Collection> {
    _entity: PhantomData<E>,
}

impl<E> CollectionRepository<E>
where
    E: Collection,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    fn pk_column() -> E::Column {
        E::PrimaryKey::iter()
            .next()
            .map(PrimaryKeyToColumn::into_column)
            .expect("collection entities define a primary key")
    }

    /// All records, newest first.
    pub async fn find_all() -> StorageResult<Vec<E::Model>> {
        let db = get_db_connection().await?;
        Ok(E::find().order_by_desc(Self::pk_column()).all(&db).await?)
    }

    pub async fn find_by_id(id: i32) -> StorageResult<Option<E::Model>> {
        let db = get_db_connection().await?;
        Ok(E::find_by_id(<E::PrimaryKey as PrimaryKeyTrait>::ValueType::from(id))
            .one(&db)
            .await?)
    }

    /// Insert and return the persisted record with its server-assigned id.
    pub async fn insert<A>(model: A) -> StorageResult<E::Model>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        let db = get_db_connection().await?;
        Ok(model.insert(&db).await?)
    }

    /// Partial update keyed by the id set on the active model.
    pub async fn update<A>(model: A) -> StorageResult<E::Model>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        let db = get_db_connection().await?;
        model.update(&db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => StorageError::EntityNotFound(E::KIND.to_string()),
            other => StorageError::DBError(other),
        })
    }

    /// Delete by id, distinguishing "no matching row" from transport failure.
    pub async fn delete(id: i32) -> StorageResult<()> {
        let db = get_db_connection().await?;
        let result = E::delete_by_id(<E::PrimaryKey as PrimaryKeyTrait>::ValueType::from(id))
            .exec(&db)
            .await?;
        if result.rows_affected == 0 {
            return Err(StorageError::EntityNotFound(E::KIND.to_string()));
        }
        Ok(())
    }
}

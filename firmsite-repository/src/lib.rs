use firmsite_common::FSAppContext;
use firmsite_error::storage::StorageError;
use firmsite_models::DbManager;
use firmsite_storage::FSDbManager;
use sea_orm::DatabaseConnection;

pub mod admin_user;
pub mod background_image;
pub mod collection;
pub mod content;
pub mod submission;

pub use admin_user::AdminUserRepository;
pub use background_image::BackgroundImageRepository;
pub use collection::{Collection, CollectionRepository};
pub use content::PublishedContentRepository;
pub use submission::{ConsultationRequestRepository, ContactSubmissionRepository};

#[inline]
pub async fn get_db_connection() -> Result<DatabaseConnection, StorageError> {
    let ctx = FSAppContext::instance().await;
    ctx.db_manager()
        .map_err(|_| StorageError::StorageUnavailable)?
        .downcast_ref::<FSDbManager>()
        .ok_or(StorageError::StorageUnavailable)?
        .get_connection()
}

//! Repository for the admin allow-list.
//!
//! The gate issues one lookup per sign-in keyed by email OR identity
//! subject, filtered to active entries; zero or one row is expected. A row
//! still holding the placeholder subject is bound to the real identity on
//! first match (idempotent, safe to attempt on every match).

use crate::get_db_connection;
use firmsite_error::StorageResult;
use firmsite_models::{
    constants::ADMIN_SUBJECT_PLACEHOLDER,
    entities::prelude::{AdminUser, AdminUserActiveModel, AdminUserColumn, AdminUserModel},
    enums::common::Status,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, Set};

pub struct AdminUserRepository;

impl AdminUserRepository {
    /// Active allow-list row matching the identity's email or subject.
    pub async fn find_active_match(
        email: Option<&str>,
        subject: &str,
    ) -> StorageResult<Option<AdminUserModel>> {
        let db = get_db_connection().await?;

        let mut identity = Condition::any().add(AdminUserColumn::Subject.eq(subject));
        if let Some(email) = email {
            identity = identity.add(AdminUserColumn::Email.eq(email));
        }

        Ok(AdminUser::find()
            .filter(AdminUserColumn::Status.eq(Status::Enabled))
            .filter(identity)
            .one(&db)
            .await?)
    }

    /// Bind a placeholder row to the real identity subject. Rows already
    /// reconciled are left untouched, so repeating this is harmless.
    pub async fn reconcile_subject(entry: &AdminUserModel, subject: &str) -> StorageResult<()> {
        if entry.subject != ADMIN_SUBJECT_PLACEHOLDER {
            return Ok(());
        }
        let db = get_db_connection().await?;
        let _ = AdminUserActiveModel {
            id: Set(entry.id),
            subject: Set(subject.to_string()),
            ..Default::default()
        }
        .update(&db)
        .await?;
        Ok(())
    }
}

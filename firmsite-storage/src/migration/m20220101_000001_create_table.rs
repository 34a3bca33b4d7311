use firmsite_models::constants::ADMIN_SUBJECT_PLACEHOLDER;
use firmsite_models::entities::prelude::{
    AdminUser, AdminUserActiveModel, User, UserActiveModel,
};
use firmsite_models::idens::tables;
use firmsite_utils::hash;
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ConnectionTrait, DatabaseBackend, TransactionTrait};
use tracing::info;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        create_tables(manager).await?;
        create_indexes(manager).await?;
        create_sqlite_updated_at_triggers(manager).await?;
        seeding_data(manager).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for spec in tables().iter().rev() {
            manager
                .drop_table(Table::drop().table(Alias::new(spec.name)).to_owned())
                .await?;
        }
        Ok(())
    }
}

async fn create_tables(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    let backend = manager.get_database_backend();
    for spec in tables() {
        manager.create_table((spec.create)(backend)).await?;
    }
    Ok(())
}

async fn create_indexes(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    let backend = manager.get_database_backend();
    for spec in tables() {
        for stmt in (spec.indexes)(backend) {
            manager.create_index(stmt).await?;
        }
    }
    Ok(())
}

/// Create SQLite triggers to automatically update the `updated_at` column on row updates.
///
/// For SQLite, column defaults do not support `ON UPDATE CURRENT_TIMESTAMP`. We therefore
/// create an `AFTER UPDATE` trigger per table that contains an `UpdatedAt` column. The
/// trigger updates the `updated_at` field only when the application has not explicitly
/// changed it, and it uses a `WHEN` clause to prevent infinite recursion.
async fn create_sqlite_updated_at_triggers(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    if manager.get_database_backend() != DatabaseBackend::Sqlite {
        return Ok(());
    }

    let conn = manager.get_connection();
    for spec in tables() {
        if !spec.has_updated_at {
            continue;
        }

        let table_name = spec.name;
        let trigger_name = format!("trg_{table_name}_updated_at");
        let sql = format!(
            r#"
            CREATE TRIGGER IF NOT EXISTS "{trigger_name}"
            AFTER UPDATE ON "{table_name}"
            FOR EACH ROW
            WHEN NEW."updated_at" = OLD."updated_at"
            BEGIN
                UPDATE "{table_name}" SET "updated_at" = CURRENT_TIMESTAMP WHERE rowid = NEW.rowid;
            END;
            "#
        );
        conn.execute_unprepared(&sql).await?;
    }
    Ok(())
}

/// Seed the first sign-in account and its allow-list entry. Skipped when the
/// tables already hold data, so re-running migrations is harmless.
async fn seeding_data(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    let db = manager.get_connection();

    if User::find().count(db).await? == 0 {
        let transaction = db.begin().await?;
        info!("seeding initial admin account");
        UserActiveModel {
            username: Set("admin".to_string()),
            // Must be rotated after first sign-in.
            password: Set(hash::bcrypt_hash("admin")),
            email: Set(Some("admin@firmsite.example".to_string())),
            ..Default::default()
        }
        .insert(&transaction)
        .await?;
        transaction.commit().await?;
    }

    if AdminUser::find().count(db).await? == 0 {
        let transaction = db.begin().await?;
        info!("seeding admin allow-list entry");
        AdminUserActiveModel {
            email: Set("admin@firmsite.example".to_string()),
            subject: Set(ADMIN_SUBJECT_PLACEHOLDER.to_string()),
            ..Default::default()
        }
        .insert(&transaction)
        .await?;
        transaction.commit().await?;
    }

    Ok(())
}

use crate::enums::common::Status;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum AdminUser {
    Table,
    Id,
    Email,
    Subject,
    Status,
    CreatedAt,
    UpdatedAt,
}

pub fn create_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(AdminUser::Table)
        .if_not_exists()
        .col(pk_auto(AdminUser::Id))
        .col(ColumnDef::new(AdminUser::Email).string_len(255).not_null())
        .col(
            ColumnDef::new(AdminUser::Subject)
                .string_len(128)
                .not_null(),
        )
        .col(
            ColumnDef::new(AdminUser::Status)
                .small_integer()
                .default(Status::Enabled)
                .not_null(),
        )
        .col(
            ColumnDef::new(AdminUser::CreatedAt)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(AdminUser::UpdatedAt)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

pub fn create_indexes(_backend: DatabaseBackend) -> Vec<IndexCreateStatement> {
    vec![Index::create()
        .name("idx_admin_user_email")
        .table(AdminUser::Table)
        .col(AdminUser::Email)
        .unique()
        .if_not_exists()
        .to_owned()]
}

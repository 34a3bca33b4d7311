use crate::enums::common::Status;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Username,
    Password,
    Email,
    Status,
    CreatedAt,
    UpdatedAt,
}

pub fn create_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(User::Table)
        .if_not_exists()
        .col(pk_auto(User::Id))
        .col(ColumnDef::new(User::Username).string_len(128).not_null())
        .col(ColumnDef::new(User::Password).string_len(255).not_null())
        .col(ColumnDef::new(User::Email).string_len(255))
        .col(
            ColumnDef::new(User::Status)
                .small_integer()
                .default(Status::Enabled)
                .not_null(),
        )
        .col(
            ColumnDef::new(User::CreatedAt)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(User::UpdatedAt)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

pub fn create_indexes(_backend: DatabaseBackend) -> Vec<IndexCreateStatement> {
    vec![Index::create()
        .name("idx_user_username")
        .table(User::Table)
        .col(User::Username)
        .unique()
        .if_not_exists()
        .to_owned()]
}

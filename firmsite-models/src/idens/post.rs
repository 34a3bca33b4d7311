use crate::enums::common::Status;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum Post {
    Table,
    Id,
    Title,
    Body,
    Author,
    Published,
    CreatedAt,
    UpdatedAt,
}

pub fn create_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Post::Table)
        .if_not_exists()
        .col(pk_auto(Post::Id))
        .col(ColumnDef::new(Post::Title).string_len(255).not_null())
        .col(ColumnDef::new(Post::Body).text().not_null())
        .col(ColumnDef::new(Post::Author).string_len(128))
        .col(
            ColumnDef::new(Post::Published)
                .small_integer()
                .default(Status::Enabled)
                .not_null(),
        )
        .col(
            ColumnDef::new(Post::CreatedAt)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Post::UpdatedAt)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

pub fn create_indexes(_backend: DatabaseBackend) -> Vec<IndexCreateStatement> {
    vec![Index::create()
        .name("idx_post_published_created_at")
        .table(Post::Table)
        .col(Post::Published)
        .col(Post::CreatedAt)
        .if_not_exists()
        .to_owned()]
}

use crate::enums::common::Status;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum BackgroundImage {
    Table,
    Id,
    ImageUrl,
    ObjectKey,
    Title,
    Description,
    LinkUrl,
    DisplayOrder,
    Status,
    CreatedAt,
    UpdatedAt,
}

pub fn create_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(BackgroundImage::Table)
        .if_not_exists()
        .col(pk_auto(BackgroundImage::Id))
        .col(
            ColumnDef::new(BackgroundImage::ImageUrl)
                .string_len(1024)
                .not_null(),
        )
        .col(
            ColumnDef::new(BackgroundImage::ObjectKey)
                .string_len(512)
                .not_null(),
        )
        .col(ColumnDef::new(BackgroundImage::Title).string_len(255))
        .col(ColumnDef::new(BackgroundImage::Description).text())
        .col(ColumnDef::new(BackgroundImage::LinkUrl).string_len(1024))
        .col(
            ColumnDef::new(BackgroundImage::DisplayOrder)
                .integer()
                .default(0)
                .not_null(),
        )
        .col(
            ColumnDef::new(BackgroundImage::Status)
                .small_integer()
                .default(Status::Enabled)
                .not_null(),
        )
        .col(
            ColumnDef::new(BackgroundImage::CreatedAt)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(BackgroundImage::UpdatedAt)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

pub fn create_indexes(_backend: DatabaseBackend) -> Vec<IndexCreateStatement> {
    vec![Index::create()
        .name("idx_background_image_status_order")
        .table(BackgroundImage::Table)
        .col(BackgroundImage::Status)
        .col(BackgroundImage::DisplayOrder)
        .if_not_exists()
        .to_owned()]
}

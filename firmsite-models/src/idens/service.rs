use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum Service {
    Table,
    Id,
    Title,
    Summary,
    Body,
    Icon,
    CreatedAt,
    UpdatedAt,
}

pub fn create_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Service::Table)
        .if_not_exists()
        .col(pk_auto(Service::Id))
        .col(ColumnDef::new(Service::Title).string_len(255).not_null())
        .col(ColumnDef::new(Service::Summary).text().not_null())
        .col(ColumnDef::new(Service::Body).text().not_null())
        .col(ColumnDef::new(Service::Icon).string_len(255))
        .col(
            ColumnDef::new(Service::CreatedAt)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Service::UpdatedAt)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

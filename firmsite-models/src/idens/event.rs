use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    Title,
    Description,
    Location,
    StartsAt,
    CreatedAt,
    UpdatedAt,
}

pub fn create_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Event::Table)
        .if_not_exists()
        .col(pk_auto(Event::Id))
        .col(ColumnDef::new(Event::Title).string_len(255).not_null())
        .col(ColumnDef::new(Event::Description).text().not_null())
        .col(ColumnDef::new(Event::Location).string_len(255))
        .col(ColumnDef::new(Event::StartsAt).timestamp())
        .col(
            ColumnDef::new(Event::CreatedAt)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Event::UpdatedAt)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

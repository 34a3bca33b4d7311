use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum Comment {
    Table,
    Id,
    PostId,
    AuthorName,
    Body,
    CreatedAt,
    UpdatedAt,
}

pub fn create_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Comment::Table)
        .if_not_exists()
        .col(pk_auto(Comment::Id))
        .col(ColumnDef::new(Comment::PostId).integer())
        .col(
            ColumnDef::new(Comment::AuthorName)
                .string_len(128)
                .not_null(),
        )
        .col(ColumnDef::new(Comment::Body).text().not_null())
        .col(
            ColumnDef::new(Comment::CreatedAt)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Comment::UpdatedAt)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

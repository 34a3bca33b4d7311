use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum ContactSubmission {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Subject,
    Message,
    CreatedAt,
    UpdatedAt,
}

pub fn create_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(ContactSubmission::Table)
        .if_not_exists()
        .col(pk_auto(ContactSubmission::Id))
        .col(
            ColumnDef::new(ContactSubmission::Name)
                .string_len(128)
                .not_null(),
        )
        .col(
            ColumnDef::new(ContactSubmission::Email)
                .string_len(255)
                .not_null(),
        )
        .col(ColumnDef::new(ContactSubmission::Phone).string_len(64))
        .col(ColumnDef::new(ContactSubmission::Subject).string_len(255))
        .col(ColumnDef::new(ContactSubmission::Message).text().not_null())
        .col(
            ColumnDef::new(ContactSubmission::CreatedAt)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(ContactSubmission::UpdatedAt)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

pub fn create_indexes(_backend: DatabaseBackend) -> Vec<IndexCreateStatement> {
    vec![Index::create()
        .name("idx_contact_submission_created_at")
        .table(ContactSubmission::Table)
        .col(ContactSubmission::CreatedAt)
        .if_not_exists()
        .to_owned()]
}

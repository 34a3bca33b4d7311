use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum ConsultationRequest {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Service,
    PreferredDate,
    AlternateDate,
    Notes,
    CreatedAt,
    UpdatedAt,
}

pub fn create_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(ConsultationRequest::Table)
        .if_not_exists()
        .col(pk_auto(ConsultationRequest::Id))
        .col(
            ColumnDef::new(ConsultationRequest::Name)
                .string_len(128)
                .not_null(),
        )
        .col(
            ColumnDef::new(ConsultationRequest::Email)
                .string_len(255)
                .not_null(),
        )
        .col(ColumnDef::new(ConsultationRequest::Phone).string_len(64))
        .col(
            ColumnDef::new(ConsultationRequest::Service)
                .string_len(255)
                .not_null(),
        )
        .col(ColumnDef::new(ConsultationRequest::PreferredDate).timestamp())
        .col(ColumnDef::new(ConsultationRequest::AlternateDate).timestamp())
        .col(ColumnDef::new(ConsultationRequest::Notes).text())
        .col(
            ColumnDef::new(ConsultationRequest::CreatedAt)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(ConsultationRequest::UpdatedAt)
                .timestamp()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

pub fn create_indexes(_backend: DatabaseBackend) -> Vec<IndexCreateStatement> {
    vec![Index::create()
        .name("idx_consultation_request_created_at")
        .table(ConsultationRequest::Table)
        .col(ConsultationRequest::CreatedAt)
        .if_not_exists()
        .to_owned()]
}

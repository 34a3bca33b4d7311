//! Migration-time table definitions.
//!
//! Each module owns one table: its `DeriveIden` column enum, the create-table
//! statement and any secondary indexes. `tables()` is the registry the
//! migration runner iterates, in creation order.

pub mod admin_user;
pub mod background_image;
pub mod comment;
pub mod consultation_request;
pub mod contact_submission;
pub mod event;
pub mod post;
pub mod service;
pub mod user;

use sea_orm::DatabaseBackend;
use sea_orm_migration::prelude::{IndexCreateStatement, TableCreateStatement};

/// One table the migration knows how to create.
pub struct TableSpec {
    pub name: &'static str,
    /// Tables with an `updated_at` column get a SQLite refresh trigger.
    pub has_updated_at: bool,
    pub create: fn(DatabaseBackend) -> TableCreateStatement,
    pub indexes: fn(DatabaseBackend) -> Vec<IndexCreateStatement>,
}

fn no_indexes(_backend: DatabaseBackend) -> Vec<IndexCreateStatement> {
    Vec::new()
}

/// All tables in creation order.
pub fn tables() -> Vec<TableSpec> {
    vec![
        TableSpec {
            name: "user",
            has_updated_at: true,
            create: user::create_table,
            indexes: user::create_indexes,
        },
        TableSpec {
            name: "admin_user",
            has_updated_at: true,
            create: admin_user::create_table,
            indexes: admin_user::create_indexes,
        },
        TableSpec {
            name: "service",
            has_updated_at: true,
            create: service::create_table,
            indexes: no_indexes,
        },
        TableSpec {
            name: "event",
            has_updated_at: true,
            create: event::create_table,
            indexes: no_indexes,
        },
        TableSpec {
            name: "post",
            has_updated_at: true,
            create: post::create_table,
            indexes: post::create_indexes,
        },
        TableSpec {
            name: "comment",
            has_updated_at: true,
            create: comment::create_table,
            indexes: no_indexes,
        },
        TableSpec {
            name: "contact_submission",
            has_updated_at: true,
            create: contact_submission::create_table,
            indexes: contact_submission::create_indexes,
        },
        TableSpec {
            name: "consultation_request",
            has_updated_at: true,
            create: consultation_request::create_table,
            indexes: consultation_request::create_indexes,
        },
        TableSpec {
            name: "background_image",
            has_updated_at: true,
            create: background_image::create_table,
            indexes: background_image::create_indexes,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm_migration::prelude::*;

    #[test]
    fn registry_builds_every_table_statement() {
        let specs = tables();
        assert_eq!(specs.len(), 9);
        for spec in specs {
            let stmt = (spec.create)(DatabaseBackend::Sqlite);
            let sql = stmt.to_string(sea_query::SqliteQueryBuilder);
            assert!(sql.contains(spec.name), "{sql}");
            let _ = (spec.indexes)(DatabaseBackend::Sqlite);
        }
    }
}

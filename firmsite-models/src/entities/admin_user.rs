//! `SeaORM` Entity for the admin allow-list.
//!
//! One row per person allowed into the admin area, keyed by email or by the
//! identity subject once reconciled. `subject` starts as the `pending`
//! placeholder and is bound to the real identity id on first sign-in.

use crate::enums::common::Status;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "admin_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub email: String,
    /// Identity subject id, or the `pending` placeholder until reconciled.
    pub subject: String,
    pub status: Status,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

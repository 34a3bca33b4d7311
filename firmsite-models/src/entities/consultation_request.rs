//! `SeaORM` Entity for consultation booking requests.
//!
//! The two requested-date columns hold canonical UTC timestamps; free-text
//! input is normalized before it reaches this table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "consultation_request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Requested practice area.
    pub service: String,
    pub preferred_date: Option<DateTimeUtc>,
    pub alternate_date: Option<DateTimeUtc>,
    pub notes: Option<String>,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

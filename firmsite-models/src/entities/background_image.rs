//! `SeaORM` Entity for the slideshow background image table.
//!
//! `display_order` values need not be contiguous; their relative order
//! defines the slideshow sequence. Deactivating a row removes it from the
//! public feed without deleting it.

use crate::enums::common::Status;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "background_image")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Public URL the browser loads the image from.
    pub image_url: String,
    /// Storage key addressing the underlying object for removal.
    pub object_key: String,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Optional click-through target; a slide without one is inert.
    pub link_url: Option<String>,
    pub display_order: i32,
    pub status: Status,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

use crate::{
    entities::background_image::ActiveModel as BackgroundImageActiveModel,
    enums::common::Status,
};
use sea_orm::{ActiveValue::NotSet, IntoActiveModel, Set};
use serde::Deserialize;
use validator::Validate;

/// Metadata edits for an existing image; the file itself is immutable,
/// re-upload to replace it.
#[derive(Clone, Debug, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBackgroundImage {
    #[validate(range(min = 1, message = "id is required"))]
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub link_url: Option<String>,
}

impl IntoActiveModel<BackgroundImageActiveModel> for UpdateBackgroundImage {
    fn into_active_model(self) -> BackgroundImageActiveModel {
        BackgroundImageActiveModel {
            id: Set(self.id),
            image_url: NotSet,
            object_key: NotSet,
            title: self.title.map_or(NotSet, |v| Set(Some(v))),
            description: self.description.map_or(NotSet, |v| Set(Some(v))),
            link_url: self.link_url.map_or(NotSet, |v| Set(Some(v))),
            display_order: NotSet,
            status: NotSet,
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveDirection {
    Up,
    Down,
}

/// Swap an image's display order with its immediate neighbor.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReorderPayload {
    #[validate(range(min = 1, message = "id is required"))]
    pub id: i32,
    pub direction: MoveDirection,
}

/// Activate or deactivate an image without deleting it.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangeImageStatus {
    #[validate(range(min = 1, message = "id is required"))]
    pub id: i32,
    pub status: Status,
}

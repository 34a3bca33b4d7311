use crate::entities::event::ActiveModel;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue::NotSet, DeriveIntoActiveModel, IntoActiveModel, Set};
use serde::Deserialize;
use validator::Validate;

#[derive(Clone, Debug, PartialEq, Deserialize, DeriveIntoActiveModel, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub starts_at: Option<DateTime<Utc>>,
}

/// Partial update; absent fields are left untouched.
#[derive(Clone, Debug, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEvent {
    #[validate(range(min = 1, message = "id is required"))]
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_at: Option<DateTime<Utc>>,
}

impl IntoActiveModel<ActiveModel> for UpdateEvent {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            title: self.title.map_or(NotSet, Set),
            description: self.description.map_or(NotSet, Set),
            location: self.location.map_or(NotSet, |v| Set(Some(v))),
            starts_at: self.starts_at.map_or(NotSet, |v| Set(Some(v))),
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}

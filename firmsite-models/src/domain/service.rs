use crate::entities::service::ActiveModel;
use sea_orm::{ActiveValue::NotSet, DeriveIntoActiveModel, IntoActiveModel, Set};
use serde::Deserialize;
use validator::Validate;

#[derive(Clone, Debug, PartialEq, Deserialize, DeriveIntoActiveModel, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewService {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub summary: String,
    pub body: String,
    pub icon: Option<String>,
}

/// Partial update; absent fields are left untouched.
#[derive(Clone, Debug, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateService {
    #[validate(range(min = 1, message = "id is required"))]
    pub id: i32,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub icon: Option<String>,
}

impl IntoActiveModel<ActiveModel> for UpdateService {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            title: self.title.map_or(NotSet, Set),
            summary: self.summary.map_or(NotSet, Set),
            body: self.body.map_or(NotSet, Set),
            icon: self.icon.map_or(NotSet, |v| Set(Some(v))),
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}

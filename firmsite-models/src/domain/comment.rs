use crate::entities::comment::ActiveModel;
use sea_orm::{ActiveValue::NotSet, DeriveIntoActiveModel, IntoActiveModel, Set};
use serde::Deserialize;
use validator::Validate;

#[derive(Clone, Debug, PartialEq, Deserialize, DeriveIntoActiveModel, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub post_id: Option<i32>,
    #[validate(length(min = 1, message = "authorName is required"))]
    pub author_name: String,
    #[validate(length(min = 1, message = "body is required"))]
    pub body: String,
}

/// Partial update; absent fields are left untouched.
#[derive(Clone, Debug, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateComment {
    #[validate(range(min = 1, message = "id is required"))]
    pub id: i32,
    pub post_id: Option<i32>,
    pub author_name: Option<String>,
    pub body: Option<String>,
}

impl IntoActiveModel<ActiveModel> for UpdateComment {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            post_id: self.post_id.map_or(NotSet, |v| Set(Some(v))),
            author_name: self.author_name.map_or(NotSet, Set),
            body: self.body.map_or(NotSet, Set),
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}

use crate::{entities::post::ActiveModel as PostActiveModel, enums::common::Status};
use sea_orm::{ActiveValue::NotSet, IntoActiveModel, Set};
use serde::Deserialize;
use validator::Validate;

#[derive(Clone, Debug, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub body: String,
    pub author: Option<String>,
    #[serde(default = "default_published")]
    pub published: Status,
}

fn default_published() -> Status {
    Status::Enabled
}

impl IntoActiveModel<PostActiveModel> for NewPost {
    fn into_active_model(self) -> PostActiveModel {
        PostActiveModel {
            id: NotSet,
            title: Set(self.title),
            body: Set(self.body),
            author: Set(self.author),
            published: Set(self.published),
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePost {
    #[validate(range(min = 1, message = "id is required"))]
    pub id: i32,
    pub title: Option<String>,
    pub body: Option<String>,
    pub author: Option<String>,
    pub published: Option<Status>,
}

impl IntoActiveModel<PostActiveModel> for UpdatePost {
    fn into_active_model(self) -> PostActiveModel {
        PostActiveModel {
            id: Set(self.id),
            title: self.title.map_or(NotSet, Set),
            body: self.body.map_or(NotSet, Set),
            author: self.author.map_or(NotSet, |a| Set(Some(a))),
            published: self.published.map_or(NotSet, Set),
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}

use crate::{
    constants::ADMIN_SUBJECT_PLACEHOLDER,
    entities::admin_user::ActiveModel as AdminUserActiveModel, enums::common::Status,
};
use sea_orm::{ActiveValue::NotSet, IntoActiveModel, Set};
use serde::Deserialize;
use validator::Validate;

/// New allow-list entry. The subject is rarely known up front; it defaults
/// to the placeholder and is reconciled on the admin's first sign-in.
#[derive(Clone, Debug, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewAdminUser {
    #[validate(email(message = "email is invalid"))]
    pub email: String,
    pub subject: Option<String>,
}

impl IntoActiveModel<AdminUserActiveModel> for NewAdminUser {
    fn into_active_model(self) -> AdminUserActiveModel {
        AdminUserActiveModel {
            id: NotSet,
            email: Set(self.email),
            subject: Set(self
                .subject
                .unwrap_or_else(|| ADMIN_SUBJECT_PLACEHOLDER.to_string())),
            status: NotSet,
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}

/// Partial update; absent fields are left untouched.
#[derive(Clone, Debug, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdminUser {
    #[validate(range(min = 1, message = "id is required"))]
    pub id: i32,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub status: Option<Status>,
}

impl IntoActiveModel<AdminUserActiveModel> for UpdateAdminUser {
    fn into_active_model(self) -> AdminUserActiveModel {
        AdminUserActiveModel {
            id: Set(self.id),
            email: self.email.map_or(NotSet, Set),
            subject: self.subject.map_or(NotSet, Set),
            status: self.status.map_or(NotSet, Set),
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}

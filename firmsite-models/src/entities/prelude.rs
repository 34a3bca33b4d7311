pub use super::admin_user::{
    ActiveModel as AdminUserActiveModel, Column as AdminUserColumn, Entity as AdminUser,
    Model as AdminUserModel,
};
pub use super::background_image::{
    ActiveModel as BackgroundImageActiveModel, Column as BackgroundImageColumn,
    Entity as BackgroundImage, Model as BackgroundImageModel,
};
pub use super::comment::{
    ActiveModel as CommentActiveModel, Column as CommentColumn, Entity as Comment,
    Model as CommentModel,
};
pub use super::consultation_request::{
    ActiveModel as ConsultationRequestActiveModel, Column as ConsultationRequestColumn,
    Entity as ConsultationRequest, Model as ConsultationRequestModel,
};
pub use super::contact_submission::{
    ActiveModel as ContactSubmissionActiveModel, Column as ContactSubmissionColumn,
    Entity as ContactSubmission, Model as ContactSubmissionModel,
};
pub use super::event::{
    ActiveModel as EventActiveModel, Column as EventColumn, Entity as Event, Model as EventModel,
};
pub use super::post::{
    ActiveModel as PostActiveModel, Column as PostColumn, Entity as Post, Model as PostModel,
};
pub use super::service::{
    ActiveModel as ServiceActiveModel, Column as ServiceColumn, Entity as Service,
    Model as ServiceModel,
};
pub use super::user::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as User, Model as UserModel,
};

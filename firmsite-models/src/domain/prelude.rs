pub use super::admin_user::{NewAdminUser, UpdateAdminUser};
pub use super::auth::{Claims, LoginRequest, LoginResponse};
pub use super::background_image::{
    ChangeImageStatus, MoveDirection, ReorderPayload, UpdateBackgroundImage,
};
pub use super::comment::{NewComment, UpdateComment};
pub use super::common::{PageParams, PageResult, PathId, TimeRangeParams};
pub use super::event::{NewEvent, UpdateEvent};
pub use super::post::{NewPost, UpdatePost};
pub use super::service::{NewService, UpdateService};
pub use super::slideshow::{SlideInfo, Slideshow, SlideshowFeed};
pub use super::submission::{
    ExportParams, NewConsultationRequest, NewContactSubmission, SubmissionPageParams,
};

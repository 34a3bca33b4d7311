use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, IntoActiveValue};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Row activation flag shared by every collection that can be taken out of
/// the public surface without being deleted.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Serialize_repr,
    Deserialize_repr,
)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
#[repr(i16)]
pub enum Status {
    Enabled = 0,
    Disabled = 1,
}

impl Status {
    #[inline]
    pub fn is_enabled(self) -> bool {
        matches!(self, Status::Enabled)
    }
}

impl IntoActiveValue<Status> for Status {
    fn into_active_value(self) -> ActiveValue<Status> {
        ActiveValue::Set(self)
    }
}

/// Collections managed through the generic admin editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Service,
    Event,
    Post,
    Comment,
    ContactSubmission,
    ConsultationRequest,
    BackgroundImage,
    AdminUser,
}

impl CollectionKind {
    /// Table/name used in routes and error messages.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Event => "event",
            Self::Post => "post",
            Self::Comment => "comment",
            Self::ContactSubmission => "contact_submission",
            Self::ConsultationRequest => "consultation_request",
            Self::BackgroundImage => "background_image",
            Self::AdminUser => "admin_user",
        }
    }

    /// Display name used in error messages.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Self::Service => "Service",
            Self::Event => "Event",
            Self::Post => "Post",
            Self::Comment => "Comment",
            Self::ContactSubmission => "ContactSubmission",
            Self::ConsultationRequest => "ConsultationRequest",
            Self::BackgroundImage => "BackgroundImage",
            Self::AdminUser => "AdminUser",
        }
    }
}

impl std::fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

//! Contact and consultation form payloads.
//!
//! Consultation requests arrive with free-text date fields; browsers render
//! the date-time widget differently, so the values are coerced to canonical
//! UTC timestamps before persisting.

use crate::entities::{
    consultation_request::ActiveModel as ConsultationRequestActiveModel,
    contact_submission::ActiveModel,
};
use crate::domain::common::{PageParams, TimeRangeParams};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use sea_orm::{ActiveValue::NotSet, DeriveIntoActiveModel, Set};
use serde::Deserialize;
use validator::Validate;

#[derive(Clone, Debug, PartialEq, Deserialize, DeriveIntoActiveModel, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewContactSubmission {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email is invalid"))]
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewConsultationRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email is invalid"))]
    pub email: String,
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "service is required"))]
    pub service: String,
    /// Free-text; normalized before persisting.
    pub preferred_date: Option<String>,
    /// Free-text; normalized before persisting.
    pub alternate_date: Option<String>,
    pub notes: Option<String>,
}

impl NewConsultationRequest {
    /// Convert to an active model with both date fields normalized.
    ///
    /// # Errors
    /// Returns the offending input when a non-empty date cannot be parsed.
    pub fn into_normalized_active_model(
        self,
    ) -> Result<ConsultationRequestActiveModel, String> {
        let preferred = normalize_date_input(self.preferred_date.as_deref())?;
        let alternate = normalize_date_input(self.alternate_date.as_deref())?;
        Ok(ConsultationRequestActiveModel {
            id: NotSet,
            name: Set(self.name),
            email: Set(self.email),
            phone: Set(self.phone),
            service: Set(self.service),
            preferred_date: Set(preferred),
            alternate_date: Set(alternate),
            notes: Set(self.notes),
            created_at: NotSet,
            updated_at: NotSet,
        })
    }
}

/// Parse the date formats browsers actually submit into a UTC timestamp.
///
/// Accepted: RFC 3339, `YYYY-MM-DDTHH:MM[:SS]` (datetime-local widget),
/// `YYYY-MM-DD HH:MM[:SS]`, bare `YYYY-MM-DD` (midnight). Empty input is
/// `None`; anything else is an error carrying the raw input.
pub fn normalize_date_input(input: Option<&str>) -> Result<Option<DateTime<Utc>>, String> {
    let text = match input.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(text) => text,
    };

    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Ok(Some(ts.with_timezone(&Utc)));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(Some(naive.and_utc()));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(Some(date.and_hms_opt(0, 0, 0).unwrap().and_utc()));
    }

    Err(format!("unrecognized date: `{text}`"))
}

/// Paged listing filter shared by both submission collections.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmissionPageParams {
    #[serde(flatten)]
    #[validate(nested)]
    pub page: PageParams,
    #[serde(flatten)]
    #[validate(nested)]
    pub time_range: TimeRangeParams,
}

/// Export filter: both bounds optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ExportParams {
    #[serde(flatten)]
    pub time_range: TimeRangeParams,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn empty_and_missing_dates_normalize_to_none() {
        assert_eq!(normalize_date_input(None).unwrap(), None);
        assert_eq!(normalize_date_input(Some("")).unwrap(), None);
        assert_eq!(normalize_date_input(Some("   ")).unwrap(), None);
    }

    #[test]
    fn widget_formats_normalize_to_the_same_timestamp() {
        let a = normalize_date_input(Some("2026-03-04T10:30")).unwrap().unwrap();
        let b = normalize_date_input(Some("2026-03-04 10:30:00")).unwrap().unwrap();
        let c = normalize_date_input(Some("2026-03-04T10:30:00Z")).unwrap().unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.hour(), 10);
    }

    #[test]
    fn bare_date_becomes_midnight_utc() {
        let ts = normalize_date_input(Some("2026-03-04")).unwrap().unwrap();
        assert_eq!(ts.to_rfc3339(), "2026-03-04T00:00:00+00:00");
    }

    #[test]
    fn garbage_dates_are_rejected_with_the_raw_input() {
        let err = normalize_date_input(Some("next tuesday")).unwrap_err();
        assert!(err.contains("next tuesday"));
    }
}

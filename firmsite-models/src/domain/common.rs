use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_aux::prelude::*;
use serde_with::{serde_as, DisplayFromStr};
use validator::Validate;

/// Path segment carrying a record id.
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct PathId {
    #[validate(range(min = 1, message = "id is required"))]
    pub id: i32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    #[validate(required(message = "page is required"))]
    pub page: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    #[validate(required(message = "pageSize is required"))]
    pub page_size: Option<u32>,
}

/// Optional closed interval on a record's creation timestamp. Either side
/// may be open-ended.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TimeRangeParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub end_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageResult<T> {
    pub pages: u32,
    pub records: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

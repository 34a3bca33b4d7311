//! Spreadsheet export for admin collections.
//!
//! Flattens row objects (as `serde_json::Value` maps) into a single-sheet
//! workbook. Callers control the output columns, their order and an optional
//! per-column transform; records may be narrowed by a closed date interval
//! before projection.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use firmsite_error::export::ExportError;
use rust_xlsxwriter::{Format, Workbook};
use serde_json::Value;

/// Widest column the export will produce, in characters.
const MAX_COLUMN_WIDTH: usize = 50;

/// Projection rule from a raw record field to a spreadsheet column.
pub struct ExportColumn {
    /// Field name looked up on each record.
    pub key: &'static str,
    /// Header label written to the first row.
    pub label: &'static str,
    /// Optional pure value-to-text transform; `None` stringifies as-is.
    pub transform: Option<fn(&Value) -> String>,
}

impl ExportColumn {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            transform: None,
        }
    }

    pub const fn with_transform(
        key: &'static str,
        label: &'static str,
        transform: fn(&Value) -> String,
    ) -> Self {
        Self {
            key,
            label,
            transform: Some(transform),
        }
    }

    fn render(&self, record: &Value) -> String {
        let raw = record.get(self.key).unwrap_or(&Value::Null);
        match self.transform {
            Some(transform) => transform(raw),
            None => stringify(raw),
        }
    }
}

/// Closed interval applied to a record's timestamp field before export.
/// Either bound may be absent (unbounded on that side).
#[derive(Debug, Clone, Default)]
pub struct DateFilter {
    pub field: &'static str,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DateFilter {
    pub fn new(
        field: &'static str,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Self {
        Self { field, start, end }
    }

    /// Whether the record's date field falls within `[start, end]`.
    /// Records without a parseable timestamp never survive an active filter.
    fn contains(&self, record: &Value) -> bool {
        let ts = match record.get(self.field).and_then(parse_timestamp) {
            Some(ts) => ts,
            None => return false,
        };
        if let Some(start) = self.start {
            if ts < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if ts > end {
                return false;
            }
        }
        true
    }

    fn is_active(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }
}

/// Build a single-sheet workbook from `records` and return its bytes.
///
/// Column order in the output matches the order of `columns`; callers control
/// presentation independent of the underlying record field order.
///
/// # Errors
/// - `ExportError::NoRecords` when no record survives the date filter.
/// - `ExportError::Workbook` on serialization failure.
pub fn export_to_buffer(
    records: &[Value],
    columns: &[ExportColumn],
    sheet_name: &str,
    filter: Option<&DateFilter>,
) -> Result<Vec<u8>, ExportError> {
    let surviving: Vec<&Value> = records
        .iter()
        .filter(|record| match filter {
            Some(f) if f.is_active() => f.contains(record),
            _ => true,
        })
        .collect();

    if surviving.is_empty() {
        return Err(ExportError::NoRecords);
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet_name)
        .map_err(|e| ExportError::Workbook(format!("sheet name: {e}")))?;

    let header_format = Format::new().set_bold();
    for (col, column) in columns.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, column.label, &header_format)
            .map_err(|e| ExportError::Workbook(format!("write header: {e}")))?;
    }

    // Track the widest cell per column while writing rows.
    let mut widths: Vec<usize> = columns
        .iter()
        .map(|c| c.label.chars().count())
        .collect();

    for (row, record) in surviving.iter().enumerate() {
        for (col, column) in columns.iter().enumerate() {
            let text = column.render(record);
            widths[col] = widths[col].max(text.chars().count());
            worksheet
                .write_string((row + 1) as u32, col as u16, &text)
                .map_err(|e| ExportError::Workbook(format!("write cell: {e}")))?;
        }
    }

    for (col, width) in widths.iter().enumerate() {
        worksheet
            .set_column_width(col as u16, column_width(*width) as f64)
            .map_err(|e| ExportError::Workbook(format!("column width: {e}")))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ExportError::Workbook(format!("save: {e}")))
}

/// Display width for a column whose widest content is `content_width` chars.
/// Caps runaway widths from long free-text fields while keeping short
/// columns readable.
fn column_width(content_width: usize) -> usize {
    MAX_COLUMN_WIDTH.min(content_width + 2)
}

/// Attachment filename for an export started on `date`.
///
/// A base that already names an `.xlsx` file is kept as-is. With both filter
/// bounds set the range replaces the date suffix, so repeated exports of the
/// same range produce the same name.
pub fn export_filename_on(base: &str, filter: Option<&DateFilter>, date: NaiveDate) -> String {
    if base.ends_with(".xlsx") {
        return base.to_string();
    }
    if let Some(f) = filter {
        if let (Some(start), Some(end)) = (f.start, f.end) {
            return format!(
                "{base}_{}_to_{}.xlsx",
                start.format("%Y-%m-%d"),
                end.format("%Y-%m-%d")
            );
        }
    }
    format!("{base}_{}.xlsx", date.format("%Y-%m-%d"))
}

/// `export_filename_on` pinned to today.
pub fn export_filename(base: &str, filter: Option<&DateFilter>) -> String {
    export_filename_on(base, filter, Utc::now().date_naive())
}

fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    let text = value.as_str()?;
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Some(ts.with_timezone(&Utc));
    }
    // SQLite timestamps come back without an offset.
    chrono::NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| chrono::NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S"))
        .map(|naive| naive.and_utc())
        .ok()
}

/// Stock transforms shared by the export endpoints.
pub mod transforms {
    use super::*;

    /// Boolean-ish values to "Yes"/"No".
    pub fn yes_no(value: &Value) -> String {
        let truthy = match value {
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_i64().is_some_and(|v| v != 0),
            Value::String(s) => s == "true" || s == "1",
            _ => false,
        };
        if truthy { "Yes".into() } else { "No".into() }
    }

    /// Timestamp to a compact date-time string; non-timestamps pass through.
    pub fn date_time(value: &Value) -> String {
        match parse_timestamp(value) {
            Some(ts) => ts.to_rfc3339_opts(SecondsFormat::Secs, true),
            None => super::stringify(value),
        }
    }

    /// Timestamp to a plain date; non-timestamps pass through.
    pub fn date_only(value: &Value) -> String {
        match parse_timestamp(value) {
            Some(ts) => ts.format("%Y-%m-%d").to_string(),
            None => super::stringify(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn record(name: &str, created_at: &str) -> Value {
        json!({ "name": name, "active": true, "created_at": created_at })
    }

    fn columns() -> Vec<ExportColumn> {
        vec![
            ExportColumn::new("name", "Name"),
            ExportColumn::with_transform("active", "Active", transforms::yes_no),
            ExportColumn::with_transform("created_at", "Created", transforms::date_time),
        ]
    }

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn empty_export_is_a_warning_not_a_crash() {
        let err = export_to_buffer(&[], &columns(), "Sheet1", None).unwrap_err();
        assert!(matches!(err, ExportError::NoRecords));
    }

    #[test]
    fn all_records_survive_without_filter() {
        let records = vec![
            record("a", "2026-01-01T10:00:00Z"),
            record("b", "2026-02-01T10:00:00Z"),
        ];
        let bytes = export_to_buffer(&records, &columns(), "Sheet1", None).unwrap();
        assert!(!bytes.is_empty());
    }

    #[test]
    fn start_only_filter_keeps_records_at_or_after_bound() {
        let filter = DateFilter::new("created_at", Some(utc(2026, 2, 1)), None);
        assert!(!filter.contains(&record("a", "2026-01-31T23:59:59Z")));
        assert!(filter.contains(&record("b", "2026-02-01T00:00:00Z")));
        assert!(filter.contains(&record("c", "2026-03-01T00:00:00Z")));
    }

    #[test]
    fn end_only_filter_keeps_records_at_or_before_bound() {
        let filter = DateFilter::new("created_at", None, Some(utc(2026, 2, 1)));
        assert!(filter.contains(&record("a", "2026-02-01T00:00:00Z")));
        assert!(!filter.contains(&record("b", "2026-02-01T00:00:01Z")));
    }

    #[test]
    fn both_bounds_form_a_closed_interval() {
        let filter = DateFilter::new("created_at", Some(utc(2026, 1, 1)), Some(utc(2026, 1, 31)));
        assert!(filter.contains(&record("a", "2026-01-01T00:00:00Z")));
        assert!(filter.contains(&record("b", "2026-01-15T12:00:00Z")));
        assert!(!filter.contains(&record("c", "2026-02-01T00:00:00Z")));
    }

    #[test]
    fn records_without_parseable_timestamp_are_excluded_by_active_filter() {
        let filter = DateFilter::new("created_at", Some(utc(2026, 1, 1)), None);
        assert!(!filter.contains(&record("a", "not a date")));
        assert!(!filter.contains(&json!({ "name": "missing" })));
    }

    #[test]
    fn filtered_export_rejects_when_nothing_survives() {
        let records = vec![record("a", "2025-01-01T00:00:00Z")];
        let filter = DateFilter::new("created_at", Some(utc(2026, 1, 1)), None);
        let err = export_to_buffer(&records, &columns(), "Sheet1", Some(&filter)).unwrap_err();
        assert!(matches!(err, ExportError::NoRecords));
    }

    #[test]
    fn column_width_is_capped_and_padded() {
        assert_eq!(column_width(4), 6);
        assert_eq!(column_width(47), 49);
        assert_eq!(column_width(48), 50);
        assert_eq!(column_width(500), 50);
    }

    #[test]
    fn filename_gets_date_suffix_unless_extension_supplied() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 8).unwrap();
        assert_eq!(
            export_filename_on("contacts", None, date),
            "contacts_2026-08-08.xlsx"
        );
        assert_eq!(
            export_filename_on("contacts.xlsx", None, date),
            "contacts.xlsx"
        );
    }

    #[test]
    fn filename_uses_range_when_both_bounds_set() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 8).unwrap();
        let filter = DateFilter::new("created_at", Some(utc(2026, 1, 1)), Some(utc(2026, 1, 31)));
        assert_eq!(
            export_filename_on("contacts", Some(&filter), date),
            "contacts_2026-01-01_to_2026-01-31.xlsx"
        );
        // One open bound falls back to the date suffix.
        let open = DateFilter::new("created_at", Some(utc(2026, 1, 1)), None);
        assert_eq!(
            export_filename_on("contacts", Some(&open), date),
            "contacts_2026-08-08.xlsx"
        );
    }

    #[test]
    fn yes_no_transform() {
        assert_eq!(transforms::yes_no(&json!(true)), "Yes");
        assert_eq!(transforms::yes_no(&json!(false)), "No");
        assert_eq!(transforms::yes_no(&json!(1)), "Yes");
        assert_eq!(transforms::yes_no(&json!(0)), "No");
        assert_eq!(transforms::yes_no(&Value::Null), "No");
    }

    #[test]
    fn date_transforms_pass_non_timestamps_through() {
        assert_eq!(transforms::date_only(&json!("2026-03-04T10:30:00Z")), "2026-03-04");
        assert_eq!(transforms::date_only(&json!("n/a")), "n/a");
    }
}

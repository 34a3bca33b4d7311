use thiserror::Error;

/// Errors raised by the spreadsheet exporter.
#[derive(Error, Debug)]
pub enum ExportError {
    /// An empty export set is a warning for the caller, not a failure.
    #[error("no records to export")]
    NoRecords,
    #[error("invalid export column `{0}`")]
    InvalidColumn(String),
    #[error("workbook error: {0}")]
    Workbook(String),
}

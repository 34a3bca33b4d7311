use thiserror::Error;

/// Errors raised by the media object store.
///
/// Removal failures are deliberately non-fatal at call sites that only need
/// the database record gone; callers log them and move on.
#[derive(Error, Debug)]
pub enum ObjectStoreError {
    #[error("object store unavailable: {0}")]
    Unavailable(String),
    #[error("invalid object key: {0}")]
    InvalidKey(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("store failed for `{key}`: {source}")]
    Store {
        key: String,
        source: std::io::Error,
    },
    #[error("remove failed for `{key}`: {source}")]
    Remove {
        key: String,
        source: std::io::Error,
    },
}

use thiserror::Error;

/// Classifies cache-related errors to avoid ad-hoc strings.
#[derive(Error, Debug, Clone)]
pub enum CacheError {
    /// Operation could not initialize or persist a value atomically
    #[error("cache initialization failure: {0}")]
    Initialization(String),
    /// Generic cache error message
    #[error("cache error: {0}")]
    Msg(String),
    /// Key does not exist or value factory returned no value
    #[error("cache key missing: {0}")]
    KeyMiss(String),
    /// Cache already exists
    #[error("cache already exists: {0}")]
    AlreadyExists(String),
    /// Cache not found
    #[error("cache not found: {0}")]
    NotFound(String),
}

#[derive(Error, Debug, Default)]
pub enum StorageError {
    #[error("database unavailable")]
    #[default]
    StorageUnavailable,

    #[error("database error: `{0}`")]
    DBError(#[from] sea_orm::DbErr),

    /// The reserved "no matching row" case, distinguished from transport failure.
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("{0}")]
    CacheKind(#[from] CacheError),
}

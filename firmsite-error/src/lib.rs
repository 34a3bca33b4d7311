pub mod export;
pub mod init;
pub mod object_store;
pub mod storage;
pub mod web;

use anyhow::Error as AnyhowError;
use config::ConfigError;
use export::ExportError;
use init::InitContextError;
use object_store::ObjectStoreError;
use sea_orm::DbErr;
use serde_json::Error as SerdeJsonError;
use std::{error::Error as StdError, io::Error as IoError, num::TryFromIntError};
use storage::StorageError;
use thiserror::Error;
use tokio::{task::JoinError, time::Duration};
use web::WebError;

pub type FSResult<T, E = FSError> = anyhow::Result<T, E>;
pub type WebResult<T, E = WebError> = anyhow::Result<T, E>;
pub type StorageResult<T, E = StorageError> = Result<T, E>;
pub type ObjectStoreResult<T, E = ObjectStoreError> = Result<T, E>;

#[derive(Error, Debug, Default)]
pub enum FSError {
    #[error("service unavailable")]
    #[default]
    ServiceUnavailable,
    #[error("read/write timeout")]
    Timeout(Duration),
    #[error("{0}")]
    JoinError(#[from] JoinError),
    #[error("{0}")]
    StdError(#[from] Box<dyn StdError + Send + Sync>),
    #[error("{0}")]
    IoError(#[from] IoError),
    #[error("{0}")]
    Msg(String),
    #[error("{0}")]
    Anyhow(#[from] AnyhowError),
    #[error("{0}")]
    Json(#[from] SerdeJsonError),
    #[error("{0}")]
    ConfigError(#[from] ConfigError),
    #[error("{0}")]
    TryFromIntError(#[from] TryFromIntError),
    #[error("{0}")]
    StorageError(#[from] StorageError),
    #[error("{0}")]
    ObjectStoreError(#[from] ObjectStoreError),
    #[error("{0}")]
    ExportError(#[from] ExportError),
    #[error("{0}")]
    InitContextError(#[from] InitContextError),
    #[error("{0}")]
    WebError(#[from] WebError),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("Initialization error: {0}")]
    InitializationError(String),
    #[error("Shutdown error: {0}")]
    ShutdownError(String),
    #[error("Invalid state error: {0}")]
    InvalidStateError(String),
    #[error("Unknown error")]
    None,
}

impl From<String> for FSError {
    #[inline]
    fn from(e: String) -> Self {
        FSError::Msg(e)
    }
}

impl From<&str> for FSError {
    #[inline]
    fn from(e: &str) -> Self {
        FSError::Msg(e.to_string())
    }
}

impl From<DbErr> for FSError {
    #[inline]
    fn from(e: DbErr) -> Self {
        FSError::StorageError(StorageError::DBError(e))
    }
}

impl From<Box<dyn StdError>> for FSError {
    #[inline]
    fn from(e: Box<dyn StdError>) -> Self {
        FSError::Msg(e.to_string())
    }
}

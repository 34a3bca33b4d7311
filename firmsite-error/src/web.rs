use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::{object_store::ObjectStoreError, storage::StorageError, FSError};

#[derive(Error, Debug)]
pub enum WebError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("BadRequest: `{0}`")]
    BadRequest(String),
    #[error("`{0}` not found")]
    NotFound(String),
    /// Authorization denial is a terminal state of its own, not a failure
    /// of the operation behind it.
    #[error("Forbidden: `{0}`")]
    Forbidden(String),
    #[error("InternalError: `{0}`")]
    InternalError(String),
    #[error("DBError: `{0}`")]
    StorageError(#[from] StorageError),
    #[error("ObjectStoreError: `{0}`")]
    ObjectStoreError(#[from] ObjectStoreError),
    #[error("MultipartError: `{0}`")]
    MultipartError(String),
}

impl From<std::io::Error> for WebError {
    fn from(e: std::io::Error) -> Self {
        WebError::InternalError(e.to_string())
    }
}

impl From<FSError> for WebError {
    fn from(e: FSError) -> Self {
        match e {
            FSError::StorageError(StorageError::EntityNotFound(msg)) => WebError::NotFound(msg),
            FSError::Timeout(dur) => {
                WebError::BadRequest(format!("Timeout: {} ms", dur.as_millis()))
            }
            other => WebError::InternalError(other.to_string()),
        }
    }
}

impl From<actix_multipart::MultipartError> for WebError {
    fn from(e: actix_multipart::MultipartError) -> Self {
        WebError::MultipartError(e.to_string())
    }
}

impl ResponseError for WebError {
    fn error_response(&self) -> HttpResponse {
        let mut body = json!({
            "message": self.to_string()
        });
        match self {
            WebError::Unauthorized => {
                body["error"] = json!("Unauthorized");
                HttpResponse::Unauthorized().json(body)
            }
            WebError::BadRequest(_) => {
                body["error"] = json!("Bad Request");
                HttpResponse::BadRequest().json(body)
            }
            WebError::NotFound(_) => {
                body["error"] = json!("Not Found");
                HttpResponse::NotFound().json(body)
            }
            WebError::Forbidden(_) => {
                body["error"] = json!("Forbidden");
                HttpResponse::Forbidden().json(body)
            }
            WebError::InternalError(_) => {
                body["error"] = json!("Internal Server Error");
                HttpResponse::InternalServerError().json(body)
            }
            WebError::StorageError(_) => {
                body["error"] = json!("Storage Error");
                HttpResponse::InternalServerError().json(body)
            }
            WebError::ObjectStoreError(_) => {
                body["error"] = json!("Object Store Error");
                HttpResponse::InternalServerError().json(body)
            }
            WebError::MultipartError(msg) => {
                body["error"] = json!("Multipart Error");
                body["message"] = json!(msg);
                HttpResponse::InternalServerError().json(body)
            }
        }
    }
}

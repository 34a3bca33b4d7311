use thiserror::Error;

/// Error type for application context initialization
#[derive(Error, Debug)]
pub enum InitContextError {
    /// Returned when a component is requested before it was initialized
    #[error("component not initialized: {0}")]
    NotInitialized(String),
    /// Returned when type conversion fails
    #[error("type mismatch: {0}")]
    TypeMismatch(String),
    /// Returned when a primitive error occurs
    #[error("primitive error: {0}")]
    Primitive(String),
}

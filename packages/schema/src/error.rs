use thiserror::Error;

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Rejected page or node payload
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid JSON: {0}")]
    Json(String),

    #[error("{path}: {message}")]
    Invalid { path: String, message: String },

    #[error("Duplicate node id {id:?} at {second} (first seen at {first})")]
    DuplicateId {
        id: String,
        first: String,
        second: String,
    },
}

impl ValidationError {
    pub fn invalid(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            path: path.into(),
            message: message.into(),
        }
    }
}

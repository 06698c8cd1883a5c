//! Error types for the editor

use sitebuilder_schema::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Malformed mutation: {0}")]
    Mutation(#[from] serde_json::Error),
}

/// Failures at the content generation boundary. None of these touch the document.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("Prompt must not be empty")]
    EmptyPrompt,

    #[error("Prompt is {length} characters long (maximum {max})")]
    PromptTooLong { length: usize, max: usize },

    #[error("Generator failed: {0}")]
    Backend(String),

    #[error("Generated content is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("Generated content was rejected: {0}")]
    Rejected(#[from] ValidationError),
}

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Stored page '{page_id}' is invalid: {source}")]
    Corrupt {
        page_id: String,
        #[source]
        source: ValidationError,
    },

    #[error("Invalid page id: {0:?}")]
    InvalidPageId(String),

    #[error("Document has no page id")]
    NoPage,

    #[error("Autosave task is not running")]
    Stopped,

    #[error("Page store error: {0}")]
    Backend(String),
}

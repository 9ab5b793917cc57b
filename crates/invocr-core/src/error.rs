//! Error types for the invocr-core library.

use thiserror::Error;

/// Main error type for the invocr library.
#[derive(Error, Debug)]
pub enum InvocrError {
    /// Invoice extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// JSON serialization or parsing error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Encoded output was not valid UTF-8.
    #[error("encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to building an invoice record.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Required field is missing or empty.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// Field validation failed.
    #[error("validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },
}

/// Result type for the invocr library.
pub type Result<T> = std::result::Result<T, InvocrError>;

//! Error types for the slip-core library.
//!
//! The normalization pipeline itself never fails; these errors only arise at
//! the edges (reading extraction responses and configuration files).

use thiserror::Error;

/// Main error type for the slip library.
#[derive(Error, Debug)]
pub enum SlipError {
    /// An extraction response could not be interpreted.
    #[error("response error: {0}")]
    Response(#[from] ResponseError),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to reading extraction service responses.
#[derive(Error, Debug)]
pub enum ResponseError {
    /// The response body is not valid JSON.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The response body is empty.
    #[error("empty response")]
    Empty,
}

/// Result type for the slip library.
pub type Result<T> = std::result::Result<T, SlipError>;

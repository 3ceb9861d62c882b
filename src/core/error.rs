//! Error types for thingdash

use thiserror::Error;

/// Result type alias using thingdash's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Thingdash error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Request failed: {message}")]
    Request { message: String },

    #[error("Directory returned HTTP {status}")]
    BadStatus { status: u16 },

    #[error("Unexpected response shape: {message}")]
    BadResponse { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("No thing description found for id '{thing_id}'")]
    NotFound { thing_id: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

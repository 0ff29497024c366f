// Error types for blogspin.
// Covers Blogger API errors, snapshot errors, and general application errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlogspinError {
    #[error("Blogger API transport error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("no blog known to the API for {0}")]
    NotFound(String),

    #[error("malformed API response: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("corrupt snapshot at {path}: {source}")]
    CorruptSnapshot {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("site url {0:?} has no usable host component")]
    InvalidSiteUrl(String),

    #[error("missing BLOGGER_API_KEY environment variable")]
    MissingApiKey,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, BlogspinError>;

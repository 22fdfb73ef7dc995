//! Error types for the release organizer.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the release organizer.
#[derive(Error, Debug)]
pub enum Error {
    // Catalog errors
    #[error("TMDB API key not configured. Set TMDB_API_KEY environment variable")]
    ApiKeyMissing,

    #[error("Nothing found in catalog for: {0}")]
    NotFound(String),

    #[error("Too many catalog results for '{query}': {count}")]
    Ambiguous { query: String, count: u64 },

    // File system errors
    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Invalid media path: {0}")]
    InvalidPath(String),

    #[error("File already exists: {0}")]
    FileAlreadyExists(String),

    // Config errors
    #[error("Invalid config: {0}")]
    Config(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Whether this is a catalog "no results" error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

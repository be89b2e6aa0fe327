//! Error types for movie sources.

use marquee_core::ConfigError;
use marquee_tmdb::TmdbError;
use thiserror::Error;

/// Errors that can occur while loading, fetching or exporting movies.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Movie file does not exist or is not a regular file
    #[error("movie file not found: {path}")]
    NotFound {
        /// Path that was checked
        path: String,
    },

    /// Failed to read the movie file
    #[error("failed to read movie file {path}: {source}")]
    LoadError {
        /// Path to the movie file
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Movie file is not a JSON array of valid movie objects
    #[error("failed to parse movie file {path}: {source}")]
    ParseError {
        /// Path to the movie file
        path: String,
        /// JSON error (missing field, wrong type, unknown field, syntax)
        #[source]
        source: serde_json::Error,
    },

    /// A parsed movie broke a record invariant
    #[error("invalid movie at index {index}: {reason}")]
    ValidationError {
        /// Position of the movie in the file
        index: usize,
        /// Reason for validation failure
        reason: String,
    },

    /// A movie fetched from the API broke a record invariant
    #[error("invalid movie {movie_id} from TMDb: {reason}")]
    InvalidMovie {
        /// TMDb movie id
        movie_id: u64,
        /// Reason for validation failure
        reason: String,
    },

    /// Source configuration is unusable
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// TMDb request failed
    #[error("TMDb error: {0}")]
    Api(#[from] TmdbError),

    /// Failed to serialize movies to JSON
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Serialized JSON was not valid UTF-8
    #[error("exported JSON is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// I/O error while writing a snapshot
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// Whether this error came from schema or record validation.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ParseError { .. } | Self::ValidationError { .. })
    }
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

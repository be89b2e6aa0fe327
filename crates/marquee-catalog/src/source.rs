//! Movie sources: where a game's records come from.

use crate::catalog::MovieCatalog;
use crate::error::Result;
use crate::fetcher::{ApiFetcher, FetchOptions};
use crate::loader::JsonLoader;
use marquee_core::{AppConfig, ConfigError, Movie};
use marquee_tmdb::{MetadataApi, TmdbClient};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Which source to load, resolved from the caller's inputs.
#[derive(Clone, PartialEq, Eq)]
pub enum SourceSelection {
    /// Load a JSON snapshot file
    File(PathBuf),
    /// Fetch from TMDb with this API key
    Api {
        /// TMDb API key
        api_key: String,
    },
}

impl SourceSelection {
    /// Pick a source: a file path wins over an API key.
    ///
    /// Blank API keys count as absent.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingSource`] when neither is available.
    pub fn resolve(
        json_path: Option<PathBuf>,
        api_key: Option<String>,
    ) -> std::result::Result<Self, ConfigError> {
        if let Some(path) = json_path {
            return Ok(Self::File(path));
        }

        match api_key {
            Some(api_key) if !api_key.trim().is_empty() => Ok(Self::Api { api_key }),
            _ => Err(ConfigError::MissingSource),
        }
    }
}

impl fmt::Debug for SourceSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => f.debug_tuple("File").field(path).finish(),
            Self::Api { .. } => f
                .debug_struct("Api")
                .field("api_key", &"<redacted>")
                .finish(),
        }
    }
}

/// A loaded movie source.
///
/// Both variants expose the same capability: the ordered records and the
/// composer names to build subscribers from.
#[derive(Debug, Clone)]
pub enum MovieSource {
    /// Records read from a JSON snapshot; composers derived from the records
    File {
        /// Snapshot path
        path: PathBuf,
        /// Loaded records
        catalog: MovieCatalog,
    },
    /// Records fetched from TMDb; composers are the requested names
    Api {
        /// Fetched records
        catalog: MovieCatalog,
    },
}

impl MovieSource {
    /// Load the selected source.
    ///
    /// API fetches use `config.composers` and the `[tmdb]` section.
    ///
    /// # Errors
    /// Returns error if the file can't be loaded, the client can't be built,
    /// or the fetch configuration is invalid.
    pub async fn load(selection: &SourceSelection, config: &AppConfig) -> Result<Self> {
        match selection {
            SourceSelection::File(path) => Self::from_file(path),
            SourceSelection::Api { api_key } => {
                let client = TmdbClient::from_config(api_key.as_str(), &config.tmdb)?;
                Self::from_api(
                    &client,
                    &config.composers,
                    FetchOptions::from_config(&config.tmdb),
                )
                .await
            }
        }
    }

    /// Load a JSON snapshot.
    ///
    /// # Errors
    /// Returns error if the file is missing, unreadable or invalid.
    pub fn from_file(path: &Path) -> Result<Self> {
        let catalog = JsonLoader::new(path)?.load()?;
        Ok(Self::File {
            path: path.to_path_buf(),
            catalog,
        })
    }

    /// Fetch from any metadata API.
    ///
    /// # Errors
    /// Returns a configuration error for an empty composer list or a zero cap.
    pub async fn from_api<A: MetadataApi + ?Sized>(
        api: &A,
        composers: &[String],
        options: FetchOptions,
    ) -> Result<Self> {
        let catalog = ApiFetcher::new(api, options).fetch(composers).await?;
        Ok(Self::Api { catalog })
    }

    /// Records in source order.
    #[must_use]
    pub fn records(&self) -> &[Arc<Movie>] {
        self.catalog().movies()
    }

    /// Composer names for the game's subscribers.
    #[must_use]
    pub fn composer_names(&self) -> &[String] {
        self.catalog().composers()
    }

    /// The underlying catalog.
    #[must_use]
    pub fn catalog(&self) -> &MovieCatalog {
        match self {
            Self::File { catalog, .. } | Self::Api { catalog } => catalog,
        }
    }

    /// Short human-readable origin, for logs.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::File { path, .. } => format!("file {}", path.display()),
            Self::Api { .. } => "TMDb API".to_string(),
        }
    }
}

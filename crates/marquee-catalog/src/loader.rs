//! Movie loading from JSON snapshot files.
//!
//! A snapshot is a UTF-8 JSON array of movie objects. Loading is all or
//! nothing: one bad record fails the whole file.

use crate::catalog::MovieCatalog;
use crate::error::{CatalogError, Result};
use marquee_core::Movie;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Loader for a movie snapshot file.
pub struct JsonLoader {
    path: PathBuf,
}

impl JsonLoader {
    /// Create a loader for the given file.
    ///
    /// # Errors
    /// Returns error if the path doesn't exist or is not a regular file.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.is_file() {
            return Err(CatalogError::NotFound {
                path: path.display().to_string(),
            });
        }

        Ok(Self { path })
    }

    /// Path of the snapshot file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read, parse and validate every movie in the file.
    ///
    /// The catalog's composers are the distinct non-empty composer fields,
    /// sorted.
    ///
    /// # Errors
    /// Returns error if the file can't be read, isn't a JSON array of movie
    /// objects, or any movie is invalid.
    pub fn load(&self) -> Result<MovieCatalog> {
        let contents =
            std::fs::read_to_string(&self.path).map_err(|e| CatalogError::LoadError {
                path: self.path.display().to_string(),
                source: e,
            })?;

        let movies = Self::parse(&contents, &self.path.display().to_string())?;
        let catalog = MovieCatalog::from_movies(movies);

        info!(
            count = catalog.len(),
            composers = catalog.composers().len(),
            path = %self.path.display(),
            "loaded movies from file"
        );

        Ok(catalog)
    }

    /// Parse and validate snapshot text.
    ///
    /// `origin` names the input in error messages.
    ///
    /// # Errors
    /// Returns [`CatalogError::ParseError`] for schema violations and
    /// [`CatalogError::ValidationError`] for record invariant violations.
    pub fn parse(contents: &str, origin: &str) -> Result<Vec<Movie>> {
        let movies: Vec<Movie> =
            serde_json::from_str(contents).map_err(|e| CatalogError::ParseError {
                path: origin.to_string(),
                source: e,
            })?;

        for (index, movie) in movies.iter().enumerate() {
            movie
                .validate()
                .map_err(|e| CatalogError::ValidationError {
                    index,
                    reason: e.to_string(),
                })?;
        }

        debug!(count = movies.len(), origin, "parsed movie snapshot");

        Ok(movies)
    }
}

//! In-memory movie collection with query and export support.

use crate::error::Result;
use crate::filter::MovieFilter;
use marquee_core::Movie;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Ordered movie records plus the composer names a game is played with.
///
/// Records are shared behind `Arc` so the notification bus and every
/// collector can hold them without copying.
#[derive(Debug, Clone, Default)]
pub struct MovieCatalog {
    movies: Vec<Arc<Movie>>,
    composers: Vec<String>,
}

impl MovieCatalog {
    /// Build a catalog whose composers are derived from the movies.
    ///
    /// The composer list is the sorted set of distinct, non-empty composer
    /// fields.
    #[must_use]
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        let composers = derive_composers(&movies);
        Self {
            movies: movies.into_iter().map(Arc::new).collect(),
            composers,
        }
    }

    /// Build a catalog with an explicit composer list.
    ///
    /// Used for API-backed catalogs, where the composers are the names the
    /// fetch was driven by, including names that resolved to no movies.
    #[must_use]
    pub fn with_composers(movies: Vec<Movie>, composers: Vec<String>) -> Self {
        Self {
            movies: movies.into_iter().map(Arc::new).collect(),
            composers,
        }
    }

    /// Movies in catalog order.
    #[must_use]
    pub fn movies(&self) -> &[Arc<Movie>] {
        &self.movies
    }

    /// Composer names.
    #[must_use]
    pub fn composers(&self) -> &[String] {
        &self.composers
    }

    /// Number of movies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Whether the catalog holds no movies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Movies matching every criterion of `filter`, in catalog order.
    #[must_use]
    pub fn filter(&self, filter: &MovieFilter) -> Vec<Arc<Movie>> {
        self.movies
            .iter()
            .filter(|movie| filter.matches(movie))
            .cloned()
            .collect()
    }

    /// Serialize the movies as a pretty-printed JSON array.
    ///
    /// Keys keep the record field order and non-ASCII text is written as-is.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        let records: Vec<&Movie> = self.movies.iter().map(AsRef::as_ref).collect();
        let mut buf = Vec::new();
        {
            let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
            let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
            serde::Serialize::serialize(&records, &mut serializer)?;
        }
        Ok(String::from_utf8(buf)?)
    }

    /// Write the JSON snapshot to `path`, replacing any existing file.
    ///
    /// # Errors
    /// Returns error if serialization or the write fails.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json)?;

        info!(
            count = self.movies.len(),
            path = %path.display(),
            "wrote movie snapshot"
        );

        Ok(())
    }
}

fn derive_composers(movies: &[Movie]) -> Vec<String> {
    movies
        .iter()
        .map(Movie::composer)
        .filter(|composer| !composer.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(ToString::to_string)
        .collect()
}

//! Exact-match movie queries.

use marquee_core::Movie;
use serde::{Deserialize, Serialize};

/// Criteria a movie must meet to be kept by [`crate::MovieCatalog::filter`].
///
/// Unset criteria match everything. Text and year criteria are exact
/// matches; the cast criterion keeps movies whose cast contains every
/// listed name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieFilter {
    /// Exact title
    pub title: Option<String>,
    /// Exact director name
    pub director: Option<String>,
    /// Exact composer name
    pub composer: Option<String>,
    /// Release year
    pub year: Option<i32>,
    /// Names that must all appear in the cast
    pub cast: Vec<String>,
}

impl MovieFilter {
    /// Create a filter that matches every movie.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require an exact title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Require an exact director.
    #[must_use]
    pub fn director(mut self, director: impl Into<String>) -> Self {
        self.director = Some(director.into());
        self
    }

    /// Require an exact composer.
    #[must_use]
    pub fn composer(mut self, composer: impl Into<String>) -> Self {
        self.composer = Some(composer.into());
        self
    }

    /// Require a release year.
    #[must_use]
    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Require a performer in the cast. May be called repeatedly.
    #[must_use]
    pub fn with_actor(mut self, name: impl Into<String>) -> Self {
        self.cast.push(name.into());
        self
    }

    /// Check a movie against every set criterion.
    #[must_use]
    pub fn matches(&self, movie: &Movie) -> bool {
        if self.title.as_deref().is_some_and(|t| movie.title() != t) {
            return false;
        }
        if self
            .director
            .as_deref()
            .is_some_and(|d| movie.director() != d)
        {
            return false;
        }
        if self
            .composer
            .as_deref()
            .is_some_and(|c| movie.composer() != c)
        {
            return false;
        }
        if self.year.is_some_and(|y| movie.year() != Some(y)) {
            return false;
        }

        self.cast
            .iter()
            .all(|actor| movie.cast().iter().any(|member| member == actor))
    }
}

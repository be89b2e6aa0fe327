//! Shared types used across the Marquee workspace.

use crate::error::{MarqueeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single movie entry: the record published to composer subscribers.
///
/// Records are built once by a source loader and never mutated afterwards;
/// they are shared behind `Arc` by the notification bus and every collector.
/// Field order here is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Movie {
    title: String,
    director: String,
    composer: String,
    cast: Vec<String>,
    #[serde(default)]
    year: Option<i32>,
}

impl Movie {
    /// Create a movie with an empty cast and an unknown year.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        director: impl Into<String>,
        composer: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            director: director.into(),
            composer: composer.into(),
            cast: Vec::new(),
            year: None,
        }
    }

    /// Set the cast, in billing order.
    #[must_use]
    pub fn with_cast<I, S>(mut self, cast: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cast = cast.into_iter().map(Into::into).collect();
        self
    }

    /// Set the release year.
    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Set or clear the release year.
    #[must_use]
    pub fn with_optional_year(mut self, year: Option<i32>) -> Self {
        self.year = year;
        self
    }

    /// Movie title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Director name.
    #[must_use]
    pub fn director(&self) -> &str {
        &self.director
    }

    /// Composer credited for the score.
    #[must_use]
    pub fn composer(&self) -> &str {
        &self.composer
    }

    /// Main cast in billing order.
    #[must_use]
    pub fn cast(&self) -> &[String] {
        &self.cast
    }

    /// Release year, if known.
    #[must_use]
    pub fn year(&self) -> Option<i32> {
        self.year
    }

    /// Release year for display, `unknown` when absent.
    #[must_use]
    pub fn year_label(&self) -> String {
        self.year
            .map_or_else(|| "unknown".to_string(), |year| year.to_string())
    }

    /// Check the record invariants that serde cannot express.
    ///
    /// # Errors
    /// Returns a validation error if the title is blank.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(MarqueeError::Validation(
                "movie title cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.year_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> Movie {
        Movie::new("The Matrix", "The Wachowskis", "Don Davis")
            .with_cast(["Keanu Reeves", "Laurence Fishburne", "Carrie-Anne Moss"])
            .with_year(1999)
    }

    #[test]
    fn test_movie_creation() {
        let movie = matrix();
        assert_eq!(movie.title(), "The Matrix");
        assert_eq!(movie.director(), "The Wachowskis");
        assert_eq!(movie.composer(), "Don Davis");
        assert_eq!(
            movie.cast(),
            ["Keanu Reeves", "Laurence Fishburne", "Carrie-Anne Moss"]
        );
        assert_eq!(movie.year(), Some(1999));
        assert!(movie.validate().is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(matrix().to_string(), "The Matrix (1999)");

        let undated = Movie::new("Untitled", "Someone", "Nobody");
        assert_eq!(undated.to_string(), "Untitled (unknown)");
    }

    #[test]
    fn test_blank_title_rejected() {
        let movie = Movie::new("   ", "Director", "Composer");
        assert!(matches!(
            movie.validate(),
            Err(MarqueeError::Validation(_))
        ));
    }

    #[test]
    fn test_serialized_key_order() {
        let json = serde_json::to_string(&matrix()).expect("serialize movie");
        let title = json.find("\"title\"").expect("title key");
        let director = json.find("\"director\"").expect("director key");
        let composer = json.find("\"composer\"").expect("composer key");
        let cast = json.find("\"cast\"").expect("cast key");
        let year = json.find("\"year\"").expect("year key");
        assert!(title < director && director < composer && composer < cast && cast < year);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let json = r#"{"title":"T","director":"D","composer":"C","cast":[],"year":2000,"rating":5}"#;
        assert!(serde_json::from_str::<Movie>(json).is_err());
    }

    #[test]
    fn test_missing_required_field_rejected() {
        let json = r#"{"title":"T","composer":"C","cast":[],"year":2000}"#;
        assert!(serde_json::from_str::<Movie>(json).is_err());
    }

    #[test]
    fn test_cast_must_be_strings() {
        let json = r#"{"title":"T","director":"D","composer":"C","cast":["A",123],"year":2000}"#;
        assert!(serde_json::from_str::<Movie>(json).is_err());
    }

    #[test]
    fn test_year_type_checked_but_optional() {
        let bad = r#"{"title":"T","director":"D","composer":"C","cast":[],"year":"Not a year"}"#;
        assert!(serde_json::from_str::<Movie>(bad).is_err());

        let missing = r#"{"title":"T","director":"D","composer":"C","cast":[]}"#;
        let movie: Movie = serde_json::from_str(missing).expect("year may be omitted");
        assert_eq!(movie.year(), None);

        let null = r#"{"title":"T","director":"D","composer":"C","cast":[],"year":null}"#;
        let movie: Movie = serde_json::from_str(null).expect("year may be null");
        assert_eq!(movie.year(), None);
    }
}

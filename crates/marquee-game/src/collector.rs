//! Per-composer collectors and the winner's announcement.

use crate::error::{GameError, Result};
use marquee_core::Movie;
use std::fmt;
use std::sync::Arc;

/// What a collector did with a published movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// Scored by another composer
    Ignored,
    /// Kept, threshold not reached yet
    Claimed,
    /// Kept, threshold reached
    Won,
}

/// Collects the movies scored by one composer.
#[derive(Debug, Clone)]
pub struct Collector {
    name: String,
    threshold: usize,
    matched: Vec<Arc<Movie>>,
}

impl Collector {
    /// Create a collector for `name` that wins at `threshold` movies.
    ///
    /// # Errors
    /// Returns [`GameError::InvalidThreshold`] if `threshold` is 0.
    pub fn new(name: impl Into<String>, threshold: usize) -> Result<Self> {
        if threshold == 0 {
            return Err(GameError::InvalidThreshold { threshold });
        }

        Ok(Self {
            name: name.into(),
            threshold,
            matched: Vec::new(),
        })
    }

    /// Handle a published movie.
    ///
    /// Keeps the movie when its composer equals this collector's name
    /// (exact, case-sensitive).
    pub fn on_notify(&mut self, movie: &Arc<Movie>) -> NotifyOutcome {
        if movie.composer() != self.name {
            return NotifyOutcome::Ignored;
        }

        self.matched.push(Arc::clone(movie));

        if self.has_won() {
            NotifyOutcome::Won
        } else {
            NotifyOutcome::Claimed
        }
    }

    /// Whether the collector holds at least `threshold` movies.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.count() >= self.threshold
    }

    /// The announcement for this collector's matches.
    #[must_use]
    pub fn announcement(&self) -> WinAnnouncement {
        WinAnnouncement::new(self.name.clone(), self.matched.clone())
    }

    /// Composer name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of movies kept.
    #[must_use]
    pub fn count(&self) -> usize {
        self.matched.len()
    }

    /// Winning threshold.
    #[must_use]
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Movies kept, in the order they were published.
    #[must_use]
    pub fn matched(&self) -> &[Arc<Movie>] {
        &self.matched
    }
}

/// Winner's announcement: a headline and the numbered list of matches.
///
/// ```text
/// John Williams has reached the winning threshold!
/// 1) Jaws (1975) by Steven Spielberg
/// 2) Star Wars (unknown) by George Lucas
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinAnnouncement {
    composer: String,
    movies: Vec<Arc<Movie>>,
}

impl WinAnnouncement {
    /// Build an announcement for `composer` listing `movies`.
    #[must_use]
    pub fn new(composer: impl Into<String>, movies: Vec<Arc<Movie>>) -> Self {
        Self {
            composer: composer.into(),
            movies,
        }
    }

    /// Winning composer.
    #[must_use]
    pub fn composer(&self) -> &str {
        &self.composer
    }

    /// Listed movies.
    #[must_use]
    pub fn movies(&self) -> &[Arc<Movie>] {
        &self.movies
    }

    /// The headline line alone.
    #[must_use]
    pub fn headline(&self) -> String {
        format!("{} has reached the winning threshold!", self.composer)
    }
}

impl fmt::Display for WinAnnouncement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.headline())?;
        for (idx, movie) in self.movies.iter().enumerate() {
            write!(
                f,
                "\n{}) {} ({}) by {}",
                idx + 1,
                movie.title(),
                movie.year_label(),
                movie.director()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, composer: &str) -> Arc<Movie> {
        Arc::new(Movie::new(title, "Director", composer).with_year(2000))
    }

    #[test]
    fn test_zero_threshold_rejected() {
        assert_eq!(
            Collector::new("A", 0).unwrap_err(),
            GameError::InvalidThreshold { threshold: 0 }
        );
    }

    #[test]
    fn test_matching_composer_claimed_then_won() {
        let mut collector = Collector::new("A", 2).unwrap();

        assert_eq!(collector.on_notify(&movie("One", "A")), NotifyOutcome::Claimed);
        assert!(!collector.has_won());
        assert_eq!(collector.on_notify(&movie("Two", "A")), NotifyOutcome::Won);
        assert!(collector.has_won());
        assert_eq!(collector.count(), 2);
        assert_eq!(collector.threshold(), 2);
    }

    #[test]
    fn test_other_composer_ignored() {
        let mut collector = Collector::new("A", 1).unwrap();
        assert_eq!(collector.on_notify(&movie("One", "B")), NotifyOutcome::Ignored);
        assert_eq!(collector.count(), 0);
        assert!(collector.matched().is_empty());
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let mut collector = Collector::new("John Williams", 1).unwrap();
        assert_eq!(
            collector.on_notify(&movie("Jaws", "john williams")),
            NotifyOutcome::Ignored
        );
    }

    #[test]
    fn test_has_won_stays_true() {
        let mut collector = Collector::new("A", 1).unwrap();
        collector.on_notify(&movie("One", "A"));
        collector.on_notify(&movie("Two", "B"));
        assert!(collector.has_won());
        assert_eq!(collector.on_notify(&movie("Three", "A")), NotifyOutcome::Won);
        assert_eq!(collector.count(), 2);
    }

    #[test]
    fn test_matched_keeps_publish_order() {
        let mut collector = Collector::new("A", 5).unwrap();
        for title in ["One", "Two", "Three"] {
            collector.on_notify(&movie(title, "A"));
        }
        let titles: Vec<&str> = collector.matched().iter().map(|m| m.title()).collect();
        assert_eq!(titles, vec!["One", "Two", "Three"]);
    }

    #[test]
    fn test_announcement_format() {
        let mut collector = Collector::new("John Williams", 2).unwrap();
        collector.on_notify(&Arc::new(
            Movie::new("Jaws", "Steven Spielberg", "John Williams").with_year(1975),
        ));
        collector.on_notify(&Arc::new(Movie::new(
            "Star Wars",
            "George Lucas",
            "John Williams",
        )));

        let announcement = collector.announcement();
        assert_eq!(announcement.composer(), "John Williams");
        assert_eq!(announcement.movies().len(), 2);
        assert_eq!(
            announcement.to_string(),
            "John Williams has reached the winning threshold!\n\
             1) Jaws (1975) by Steven Spielberg\n\
             2) Star Wars (unknown) by George Lucas"
        );
    }
}

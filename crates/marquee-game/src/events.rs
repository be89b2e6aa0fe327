//! Game events and the observers that receive them.

use crate::collector::WinAnnouncement;
use marquee_core::Movie;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info};

/// Something that happened during a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Collectors are subscribed and publishing is about to begin
    Started {
        /// Number of records to publish
        records: usize,
        /// Collector names, in subscription order
        composers: Vec<String>,
        /// Winning threshold
        threshold: usize,
    },
    /// A movie is being published
    Published {
        /// 1-based position in the shuffled order
        position: usize,
        /// The movie
        movie: Arc<Movie>,
    },
    /// A collector kept a movie without reaching the threshold
    Claimed {
        /// Collector name
        composer: String,
        /// Collector count after the claim
        count: usize,
        /// The movie
        movie: Arc<Movie>,
    },
    /// A collector reached the threshold
    Won {
        /// Collector name
        composer: String,
        /// Collector count
        count: usize,
        /// Headline and numbered list of the collector's movies
        announcement: WinAnnouncement,
    },
    /// The publish loop stopped
    Finished {
        /// Number of records published
        published: usize,
        /// Winning composer, if any
        winner: Option<String>,
    },
}

/// Receives game events.
pub trait GameObserver {
    /// Handle one event.
    fn on_event(&self, event: &GameEvent);
}

/// Observer that logs every event with `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl GameObserver for TracingObserver {
    fn on_event(&self, event: &GameEvent) {
        match event {
            GameEvent::Started {
                records,
                composers,
                threshold,
            } => info!(
                records,
                collectors = composers.len(),
                threshold,
                "starting game"
            ),
            GameEvent::Published { position, movie } => debug!(
                position,
                title = %movie.title(),
                composer = %movie.composer(),
                "movie published"
            ),
            GameEvent::Claimed {
                composer,
                count,
                movie,
            } => info!(
                composer = %composer,
                count,
                title = %movie.title(),
                "collector claimed movie"
            ),
            GameEvent::Won {
                composer,
                count,
                announcement,
            } => info!(composer = %composer, count, "{announcement}"),
            GameEvent::Finished { published, winner } => match winner {
                Some(winner) => info!(published, winner = %winner, "game finished"),
                None => info!(published, "game finished without a winner"),
            },
        }
    }
}

/// Observer that stores events in memory.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<GameEvent>>,
}

impl RecordingObserver {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far, in order.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Titles of the published movies, in publish order.
    #[must_use]
    pub fn published_titles(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                GameEvent::Published { movie, .. } => Some(movie.title().to_string()),
                _ => None,
            })
            .collect()
    }
}

impl GameObserver for RecordingObserver {
    fn on_event(&self, event: &GameEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}

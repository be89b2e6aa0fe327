//! Game orchestrator: shuffles the records, subscribes one collector per
//! composer and publishes until someone wins.

use crate::bus::NotificationBus;
use crate::collector::{Collector, NotifyOutcome, WinAnnouncement};
use crate::error::{GameError, Result};
use crate::events::{GameEvent, GameObserver};
use marquee_core::{GameConfig, Movie};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::cell::RefCell;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

/// How records are ordered before publishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShufflePolicy {
    /// Uniform random permutation from the thread RNG
    #[default]
    Random,
    /// Uniform permutation from a seeded RNG; same seed, same order
    Seeded(u64),
    /// Keep source order
    Preserve,
}

/// The collector that ended the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameWinner {
    /// Winning composer
    pub composer: String,
    /// Movies collected
    pub count: usize,
    /// Collected movies, in publish order
    pub matched: Vec<Arc<Movie>>,
    /// Records published before the game stopped
    pub published: usize,
}

impl GameWinner {
    /// The winner's announcement.
    #[must_use]
    pub fn announcement(&self) -> WinAnnouncement {
        WinAnnouncement::new(self.composer.clone(), self.matched.clone())
    }
}

/// Result of a completed game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    /// A collector reached the threshold
    Winner(GameWinner),
    /// Every record was published and nobody reached the threshold
    NoWinner {
        /// Records published
        published: usize,
    },
}

impl GameOutcome {
    /// The winner, if any.
    #[must_use]
    pub fn winner(&self) -> Option<&GameWinner> {
        match self {
            Self::Winner(winner) => Some(winner),
            Self::NoWinner { .. } => None,
        }
    }

    /// Records published before the game stopped.
    #[must_use]
    pub fn published(&self) -> usize {
        match self {
            Self::Winner(winner) => winner.published,
            Self::NoWinner { published } => *published,
        }
    }
}

/// Runs games with a fixed threshold, shuffle policy and pacing.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    threshold: usize,
    shuffle: ShufflePolicy,
    publish_delay: Duration,
}

impl Orchestrator {
    /// Create an orchestrator with random shuffling and no publish delay.
    ///
    /// # Errors
    /// Returns [`GameError::InvalidThreshold`] if `threshold` is 0.
    pub fn new(threshold: usize) -> Result<Self> {
        if threshold == 0 {
            return Err(GameError::InvalidThreshold { threshold });
        }

        Ok(Self {
            threshold,
            shuffle: ShufflePolicy::Random,
            publish_delay: Duration::ZERO,
        })
    }

    /// Create an orchestrator from the `[game]` config section.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        let shuffle = if config.shuffle {
            ShufflePolicy::Random
        } else {
            ShufflePolicy::Preserve
        };

        Ok(Self::new(config.winning_threshold)?
            .with_shuffle(shuffle)
            .with_publish_delay(Duration::from_millis(config.publish_delay_ms)))
    }

    /// Set the shuffle policy.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: ShufflePolicy) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Set the pause after each published movie.
    #[must_use]
    pub fn with_publish_delay(mut self, delay: Duration) -> Self {
        self.publish_delay = delay;
        self
    }

    /// Winning threshold.
    #[must_use]
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Shuffle policy.
    #[must_use]
    pub fn shuffle(&self) -> ShufflePolicy {
        self.shuffle
    }

    /// Play one game.
    ///
    /// One collector is subscribed per distinct name in `composers`, in list
    /// order. After each publish the collectors are checked in that order and
    /// the first that has won ends the game.
    ///
    /// # Errors
    /// Returns [`GameError::NoComposers`] if `composers` is empty. Nothing is
    /// published in that case.
    pub async fn run(
        &self,
        records: &[Arc<Movie>],
        composers: &[String],
        observer: &dyn GameObserver,
    ) -> Result<GameOutcome> {
        let collectors = self.build_collectors(composers)?;

        observer.on_event(&GameEvent::Started {
            records: records.len(),
            composers: collectors
                .iter()
                .map(|cell| cell.borrow().name().to_string())
                .collect(),
            threshold: self.threshold,
        });

        let mut bus = NotificationBus::new(self.order(records));
        for cell in &collectors {
            bus.subscribe(move |movie| {
                let mut collector = cell.borrow_mut();
                match collector.on_notify(movie) {
                    NotifyOutcome::Ignored => {}
                    NotifyOutcome::Claimed => observer.on_event(&GameEvent::Claimed {
                        composer: collector.name().to_string(),
                        count: collector.count(),
                        movie: Arc::clone(movie),
                    }),
                    NotifyOutcome::Won => observer.on_event(&GameEvent::Won {
                        composer: collector.name().to_string(),
                        count: collector.count(),
                        announcement: collector.announcement(),
                    }),
                }
            });
        }

        let queue = bus.records().to_vec();
        let mut published = 0;

        for movie in &queue {
            published += 1;
            observer.on_event(&GameEvent::Published {
                position: published,
                movie: Arc::clone(movie),
            });
            bus.publish(movie);

            if !self.publish_delay.is_zero() {
                tokio::time::sleep(self.publish_delay).await;
            }

            if let Some(cell) = collectors.iter().find(|cell| cell.borrow().has_won()) {
                let collector = cell.borrow();
                observer.on_event(&GameEvent::Finished {
                    published,
                    winner: Some(collector.name().to_string()),
                });

                return Ok(GameOutcome::Winner(GameWinner {
                    composer: collector.name().to_string(),
                    count: collector.count(),
                    matched: collector.matched().to_vec(),
                    published,
                }));
            }
        }

        observer.on_event(&GameEvent::Finished {
            published,
            winner: None,
        });

        Ok(GameOutcome::NoWinner { published })
    }

    fn build_collectors(&self, composers: &[String]) -> Result<Vec<RefCell<Collector>>> {
        if composers.is_empty() {
            return Err(GameError::NoComposers);
        }

        let mut seen = HashSet::new();
        composers
            .iter()
            .filter(|name| seen.insert(name.as_str()))
            .map(|name| Collector::new(name.as_str(), self.threshold).map(RefCell::new))
            .collect()
    }

    fn order(&self, records: &[Arc<Movie>]) -> Vec<Arc<Movie>> {
        let mut order = records.to_vec();
        match self.shuffle {
            ShufflePolicy::Random => order.shuffle(&mut rand::thread_rng()),
            ShufflePolicy::Seeded(seed) => order.shuffle(&mut StdRng::seed_from_u64(seed)),
            ShufflePolicy::Preserve => {}
        }
        order
    }
}

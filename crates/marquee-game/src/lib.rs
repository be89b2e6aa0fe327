//! Marquee Game - Publish/subscribe engine for the composer game.
//!
//! Movies are published one at a time on a [`NotificationBus`]. Every
//! composer gets a [`Collector`] subscribed to the bus that keeps the movies
//! scored by that composer. The first collector to reach the winning threshold
//! ends the game.
//!
//! # Architecture
//!
//! - **Bus** ([`bus`]): ordered records and synchronous fan-out to subscribers
//! - **Collector** ([`collector`]): per-composer counting and the win announcement
//! - **Events** ([`events`]): game events reported to a caller-supplied observer
//! - **Orchestrator** ([`orchestrator`]): shuffling, subscription and the publish loop
//! - **Errors** ([`error`]): game configuration errors
//!
//! # Example
//!
//! ```rust,no_run
//! use marquee_core::Movie;
//! use marquee_game::{GameOutcome, Orchestrator, ShufflePolicy, TracingObserver};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), marquee_game::GameError> {
//! let records = vec![
//!     Arc::new(Movie::new("Jaws", "Steven Spielberg", "John Williams").with_year(1975)),
//!     Arc::new(Movie::new("Alien", "Ridley Scott", "Jerry Goldsmith").with_year(1979)),
//! ];
//! let composers = vec!["John Williams".to_string(), "Jerry Goldsmith".to_string()];
//!
//! let orchestrator = Orchestrator::new(1)?.with_shuffle(ShufflePolicy::Seeded(7));
//! if let GameOutcome::Winner(winner) = orchestrator
//!     .run(&records, &composers, &TracingObserver)
//!     .await?
//! {
//!     println!("{}", winner.announcement());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod bus;
pub mod collector;
pub mod error;
pub mod events;
pub mod orchestrator;

// Re-export commonly used types
pub use bus::{NotificationBus, Subscriber};
pub use collector::{Collector, NotifyOutcome, WinAnnouncement};
pub use error::{GameError, Result};
pub use events::{GameEvent, GameObserver, RecordingObserver, TracingObserver};
pub use orchestrator::{GameOutcome, GameWinner, Orchestrator, ShufflePolicy};

//! Notification bus: ordered records and synchronous fan-out.

use marquee_core::Movie;
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// A subscriber callback, invoked once per published movie.
pub type Subscriber<'a> = Box<dyn FnMut(&Arc<Movie>) + 'a>;

/// Holds the records for one game and the subscribers notified of each one.
///
/// Subscribers are called in the order they subscribed, on the caller's
/// thread. A panicking subscriber propagates out of [`publish`](Self::publish)
/// and the remaining subscribers are not called for that movie.
pub struct NotificationBus<'a> {
    records: Vec<Arc<Movie>>,
    subscribers: Vec<Subscriber<'a>>,
}

impl<'a> NotificationBus<'a> {
    /// Create a bus over `records`, with no subscribers.
    #[must_use]
    pub fn new(records: Vec<Arc<Movie>>) -> Self {
        Self {
            records,
            subscribers: Vec::new(),
        }
    }

    /// Append a subscriber. The same callback logic may be added twice.
    pub fn subscribe(&mut self, callback: impl FnMut(&Arc<Movie>) + 'a) {
        self.subscribers.push(Box::new(callback));
    }

    /// Announce `movie` and notify every subscriber with it.
    pub fn publish(&mut self, movie: &Arc<Movie>) {
        info!(
            title = %movie.title(),
            year = %movie.year_label(),
            composer = %movie.composer(),
            "publishing movie"
        );

        for subscriber in &mut self.subscribers {
            subscriber(movie);
        }
    }

    /// Records in publication order.
    #[must_use]
    pub fn records(&self) -> &[Arc<Movie>] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the bus holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl fmt::Debug for NotificationBus<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationBus")
            .field("records", &self.records.len())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

//! The metadata API surface the movie fetcher depends on.

use crate::error::Result;
use crate::models::{MovieDetails, PersonCredits, PersonSearchResponse};
use async_trait::async_trait;

/// Read-only access to a film-metadata service.
///
/// [`crate::TmdbClient`] is the production implementation; tests substitute
/// an in-memory fake.
#[async_trait]
pub trait MetadataApi: Send + Sync {
    /// Search people by name.
    ///
    /// # Errors
    /// Returns error on transport failure, non-success status or an unexpected body.
    async fn search_person(&self, name: &str) -> Result<PersonSearchResponse>;

    /// Fetch a person's movie credits.
    ///
    /// # Errors
    /// Returns error on transport failure, non-success status or an unexpected body.
    async fn person_credits(&self, person_id: u64) -> Result<PersonCredits>;

    /// Fetch a movie's details with embedded cast and crew.
    ///
    /// # Errors
    /// Returns error on transport failure, non-success status or an unexpected body.
    async fn movie_details(&self, movie_id: u64) -> Result<MovieDetails>;
}

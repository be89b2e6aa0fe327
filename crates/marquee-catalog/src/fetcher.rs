//! Movie fetching from the TMDb API, one composer at a time.
//!
//! For every composer the fetcher resolves a music-department person, walks
//! their composing credits up to a cap and fetches each movie's details.
//! Failures degrade: an unresolved composer or a failed search/credits call
//! skips that composer, a failed detail fetch skips that movie. Nothing is
//! retried.

use crate::catalog::MovieCatalog;
use crate::error::{CatalogError, Result};
use marquee_core::{ConfigError, Movie, TmdbConfig};
use marquee_tmdb::{select_composer, MetadataApi, MovieDetails, TmdbError};
use std::collections::HashSet;
use std::time::Duration;
use tracing::{info, warn};

/// Limits and pacing for an API fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Maximum composing credits considered per composer
    pub max_movies_per_composer: usize,
    /// Maximum cast names kept per movie
    pub max_cast: usize,
    /// Pause after each movie detail request
    pub request_delay: Duration,
}

impl FetchOptions {
    /// Build options from the `[tmdb]` configuration section.
    #[must_use]
    pub fn from_config(config: &TmdbConfig) -> Self {
        Self {
            max_movies_per_composer: config.max_movies_per_composer,
            max_cast: config.max_cast,
            request_delay: Duration::from_millis(config.request_delay_ms),
        }
    }

    /// Override the per-composer cap.
    #[must_use]
    pub fn with_max_movies_per_composer(mut self, cap: usize) -> Self {
        self.max_movies_per_composer = cap;
        self
    }

    /// Override the pause between detail requests.
    #[must_use]
    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self::from_config(&TmdbConfig::default())
    }
}

/// Builds a movie catalog from a [`MetadataApi`].
pub struct ApiFetcher<'a, A: MetadataApi + ?Sized> {
    api: &'a A,
    options: FetchOptions,
}

impl<'a, A: MetadataApi + ?Sized> ApiFetcher<'a, A> {
    /// Create a fetcher over `api`.
    pub fn new(api: &'a A, options: FetchOptions) -> Self {
        Self { api, options }
    }

    /// Fetch movies for every composer, in order.
    ///
    /// Each movie's `composer` is the requested name, whatever the API
    /// credits say. A movie id already fetched for an earlier composer is not
    /// fetched again. The catalog's composer list is `composers` as given,
    /// including names that produced no movies.
    ///
    /// # Errors
    /// Returns a configuration error if `composers` is empty or the cap is 0.
    /// API failures are logged and skipped, never returned.
    pub async fn fetch(&self, composers: &[String]) -> Result<MovieCatalog> {
        if composers.is_empty() {
            return Err(ConfigError::invalid("composers", "list cannot be empty").into());
        }
        if self.options.max_movies_per_composer == 0 {
            return Err(
                ConfigError::invalid("max_movies_per_composer", "must be at least 1").into(),
            );
        }

        let mut seen_ids = HashSet::new();
        let mut movies = Vec::new();

        for composer in composers {
            info!(composer = %composer, "fetching movies for composer");

            match self
                .fetch_composer(composer, &mut seen_ids, &mut movies)
                .await
            {
                Ok(added) => info!(composer = %composer, added, "finished composer"),
                Err(e) => warn!(
                    composer = %composer,
                    error = %e,
                    "skipping composer after API error"
                ),
            }
        }

        info!(
            count = movies.len(),
            composers = composers.len(),
            "fetched movies from TMDb"
        );

        Ok(MovieCatalog::with_composers(movies, composers.to_vec()))
    }

    /// Fetch one composer's movies, returning how many were added.
    async fn fetch_composer(
        &self,
        composer: &str,
        seen_ids: &mut HashSet<u64>,
        movies: &mut Vec<Movie>,
    ) -> std::result::Result<usize, TmdbError> {
        let search = self.api.search_person(composer).await?;
        let Some(person) = select_composer(&search.results) else {
            warn!(composer = %composer, "no music-department person found for composer");
            return Ok(0);
        };

        let credits = self.api.person_credits(person.id).await?;
        let movie_ids: Vec<u64> = credits
            .composing_credits()
            .take(self.options.max_movies_per_composer)
            .map(|credit| credit.id)
            .collect();

        let mut added = 0;
        for movie_id in movie_ids {
            if seen_ids.contains(&movie_id) {
                continue;
            }

            match self.fetch_movie(movie_id, composer).await {
                Ok(movie) => {
                    seen_ids.insert(movie_id);
                    info!(title = %movie.title(), composer = %composer, "added movie");
                    movies.push(movie);
                    added += 1;
                }
                Err(e) => warn!(movie_id, error = %e, "could not fetch movie"),
            }

            if !self.options.request_delay.is_zero() {
                tokio::time::sleep(self.options.request_delay).await;
            }
        }

        Ok(added)
    }

    async fn fetch_movie(&self, movie_id: u64, composer: &str) -> Result<Movie> {
        let details = self.api.movie_details(movie_id).await?;
        let movie = movie_from_details(&details, composer, self.options.max_cast);
        movie
            .validate()
            .map_err(|e| CatalogError::InvalidMovie {
                movie_id,
                reason: e.to_string(),
            })?;
        Ok(movie)
    }
}

/// Map a details payload to a movie credited to `composer`.
#[must_use]
pub fn movie_from_details(details: &MovieDetails, composer: &str, max_cast: usize) -> Movie {
    Movie::new(details.title_or_unknown(), details.director(), composer)
        .with_cast(details.main_cast(max_cast))
        .with_optional_year(details.release_year())
}

//! Marquee TMDb - Client for The Movie Database metadata API.
//!
//! This crate wraps the three TMDb endpoints the game depends on behind the
//! [`MetadataApi`] trait:
//!
//! - person search by name (ranked candidates with a department and popularity)
//! - a person's movie credits
//! - a movie's details with embedded cast and crew
//!
//! The response models carry the small extraction rules used when turning an
//! API response into a [`marquee_core::Movie`]: composer candidate selection,
//! composing-role credits, director lookup, main cast and release year.
//!
//! # Example
//!
//! ```rust,no_run
//! use marquee_tmdb::{select_composer, MetadataApi, TmdbClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = TmdbClient::new("my-api-key")?;
//!
//! let search = client.search_person("John Williams").await?;
//! if let Some(person) = select_composer(&search.results) {
//!     let credits = client.person_credits(person.id).await?;
//!     println!("{} composing credits", credits.composing_credits().count());
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

pub mod api;
pub mod client;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use api::MetadataApi;
pub use client::TmdbClient;
pub use error::{Result, TmdbError};
pub use models::{
    select_composer, CastMember, CrewCredit, CrewMember, MovieCredits, MovieDetails,
    PersonCandidate, PersonCredits, PersonSearchResponse, COMPOSING_JOBS, MUSIC_DEPARTMENTS,
};

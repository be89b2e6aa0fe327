//! Marquee Catalog - Movie sources for the composer game.
//!
//! This crate turns either a local JSON snapshot or the TMDb API into a
//! [`MovieCatalog`]: the ordered movie records plus the composer names the game
//! builds its subscribers from.
//!
//! # Architecture
//!
//! - **Catalog** ([`catalog`]): ordered records, composer list, filtering, JSON export
//! - **Filter** ([`filter`]): exact-match query over catalog records
//! - **Loader** ([`loader`]): validated JSON file loading
//! - **Fetcher** ([`fetcher`]): per-composer TMDb fetch with caps, de-duplication and pacing
//! - **Source** ([`source`]): the closed set of source variants and their selection
//! - **Errors** ([`error`]): catalog-specific error types
//!
//! # Example
//!
//! ```rust,no_run
//! use marquee_catalog::{JsonLoader, MovieFilter};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = JsonLoader::new("movie_database.json")?.load()?;
//!
//! let williams = catalog.filter(&MovieFilter::new().composer("John Williams"));
//! println!("{} movies scored by John Williams", williams.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod catalog;
pub mod error;
pub mod fetcher;
pub mod filter;
pub mod loader;
pub mod source;

// Re-export commonly used types
pub use catalog::MovieCatalog;
pub use error::{CatalogError, Result};
pub use fetcher::{ApiFetcher, FetchOptions};
pub use filter::MovieFilter;
pub use loader::JsonLoader;
pub use source::{MovieSource, SourceSelection};

//! Marquee Core - Foundation crate for the Marquee composer game.
//!
//! This crate provides the movie record type, error handling and configuration
//! management that all other Marquee crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - The shared [`Movie`] record
//!
//! # Example
//!
//! ```rust
//! use marquee_core::{AppConfig, Movie};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::default();
//! config.validate()?;
//!
//! let movie = Movie::new("Vertigo", "Alfred Hitchcock", "Bernard Herrmann")
//!     .with_cast(["James Stewart", "Kim Novak"])
//!     .with_year(1958);
//! movie.validate()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{AppConfig, GameConfig, TmdbConfig, DEFAULT_COMPOSERS};
pub use error::{ConfigError, ConfigResult, MarqueeError, Result};
pub use types::Movie;

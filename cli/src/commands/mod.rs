//! Command handlers.

pub mod composers;
pub mod game;
pub mod snapshot;
pub mod validate;

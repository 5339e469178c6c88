//! Error types for the solver's entry points.
//!
//! Move preconditions are not errors (inapplicable moves simply yield
//! no successor); only construction-time misuse surfaces here.

use thiserror::Error;

/// Errors raised before any graph work begins.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GameError {
    #[error("game size must be a positive integer, got {n}")]
    InvalidGameSize { n: u32 },
}

//! Game-theoretic evaluation of the constructed graph.
//!
//! `evaluator` runs memoized backward induction over the DAG;
//! `path` extracts one forced-play witness line afterwards.

pub mod evaluator;
pub mod path;

pub use evaluator::{evaluate, value};
pub use path::{extract_winning_path, WinningPath};

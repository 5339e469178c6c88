//! Decomposition states and the game's move rules.
//!
//! `DecompositionState` is the immutable multiset of Fibonacci units;
//! `transition` holds the pure move functions that map one state to its
//! successors, the terminality predicate, and child generation.

pub mod decomposition;
pub mod transition;

pub use decomposition::{fib, DecompositionState};
pub use transition::{
    combine_ones, generate_children, is_successor, is_terminal, legal_moves, split_pair,
    sum_consecutive, Move,
};

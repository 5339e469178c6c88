//! # zeckendorf-game
//!
//! Solver for the two-player Zeckendorf decomposition game: starting
//! from `n` units of value 1, players alternately rewrite the
//! decomposition (sum two consecutive Fibonacci units, split a doubled
//! unit, or combine two 1s) until no move remains. The player who
//! cannot move loses. The crate builds the full reachable state space,
//! runs backward induction over it, and produces the winner together
//! with one forced-play witness line.
//!
//! ## Design
//!
//! - **Layered DAG, not a tree**: a state reachable via several move
//!   sequences of equal length is stored once, with multiple parent
//!   edges. Merging is checked within each BFS layer.
//!
//! - **Arena ownership**: nodes live in a flat `Vec` addressed by
//!   `NodeId` handles. Parent/child links never own anything, so the
//!   multi-parent structure needs no reference counting.
//!
//! - **Persistent state maps**: decomposition states use `im` maps, so
//!   each move application clones in O(1) and touches only the entries
//!   it rewrites.
//!
//! - **Iterative valuation**: backward induction runs on an explicit
//!   stack with write-once memoized winners, so deep games cannot
//!   exhaust the call stack and evaluation order cannot change results.
//!
//! ## Modules
//!
//! - `state`: decomposition states and the three move rules
//! - `graph`: the node arena and breadth-first construction
//! - `eval`: backward induction and witness-path extraction
//! - `game`: the `play_game` entry point
//! - `error`: entry-point error type
//!
//! ## Usage
//!
//! ```rust
//! use zeckendorf_game::{play_game, Player};
//!
//! let outcome = play_game(2).unwrap();
//! assert_eq!(outcome.winner, Player::One);
//! assert_eq!(outcome.winning_path.move_count(), 1);
//! ```

pub mod error;
pub mod eval;
pub mod game;
pub mod graph;
pub mod state;

// Re-export commonly used types
pub use crate::error::GameError;

pub use crate::state::{
    combine_ones, fib, generate_children, is_successor, is_terminal, legal_moves, split_pair,
    sum_consecutive, DecompositionState, Move,
};

pub use crate::graph::{
    build_from, build_graph, GameGraph, GameNode, GraphStats, NodeId, Player, Winner,
};

pub use crate::eval::{evaluate, extract_winning_path, value, WinningPath};

pub use crate::game::{play_game, GameOutcome};

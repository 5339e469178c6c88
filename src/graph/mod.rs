//! The layered DAG of reachable game states.
//!
//! `GameGraph` is an arena of `GameNode`s addressed by `NodeId` handles;
//! `builder` constructs the full reachable space breadth-first, merging
//! structurally equal states within each layer.

pub mod arena;
pub mod builder;
pub mod node;

pub use arena::{GameGraph, GraphStats};
pub use builder::{build_from, build_graph};
pub use node::{GameNode, NodeId, Player, Winner};

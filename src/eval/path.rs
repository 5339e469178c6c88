//! Witness path extraction.
//!
//! After evaluation, walking chosen-child links from the root yields one
//! concrete forced-play line for the winning player. The walk is a
//! post-pass over the finished graph; it never runs during valuation.

use serde::{Deserialize, Serialize};

use crate::graph::{GameGraph, NodeId, Winner};

/// An ordered root-to-leaf sequence of nodes witnessing a forced win.
///
/// The path is not unique when several children carry the same winner;
/// the evaluator's first-match tie-break fixes one deterministically.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningPath {
    nodes: Vec<NodeId>,
}

impl WinningPath {
    /// The node handles from root to leaf.
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Number of nodes on the path (at least 1: the root).
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of moves played along the path.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// The terminal node the path ends on.
    #[must_use]
    pub fn leaf(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Whether a node lies on the path.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(&id)
    }

    /// Iterate over the handles from root to leaf.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }
}

/// Walk chosen-child links from the root of an evaluated graph.
///
/// On an unevaluated graph the walk stops at the root immediately, since
/// no chosen child has been recorded yet.
#[must_use]
pub fn extract_winning_path(graph: &GameGraph) -> WinningPath {
    debug_assert_ne!(
        graph.root_node().winner,
        Winner::Undetermined,
        "extracting a path from an unevaluated graph"
    );

    let mut nodes = vec![graph.root()];
    let mut current = graph.root();

    loop {
        let chosen = graph.get(current).chosen_child;
        if chosen.is_none() {
            break;
        }
        nodes.push(chosen);
        current = chosen;
    }

    WinningPath { nodes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::evaluate;
    use crate::graph::build_graph;

    #[test]
    fn test_path_on_terminal_root() {
        let mut graph = build_graph(1);
        evaluate(&mut graph);

        let path = extract_winning_path(&graph);
        assert_eq!(path.nodes(), &[graph.root()]);
        assert_eq!(path.move_count(), 0);
        assert_eq!(path.leaf(), Some(graph.root()));
    }

    #[test]
    fn test_path_descends_one_layer_per_step() {
        let mut graph = build_graph(6);
        evaluate(&mut graph);

        let path = extract_winning_path(&graph);
        for (step, id) in path.iter().enumerate() {
            assert_eq!(graph.get(id).depth as usize, step);
        }
    }

    #[test]
    fn test_path_edges_exist_and_end_on_leaf() {
        let mut graph = build_graph(7);
        evaluate(&mut graph);

        let path = extract_winning_path(&graph);
        let nodes = path.nodes();
        for pair in nodes.windows(2) {
            assert!(graph.get(pair[0]).children.contains(&pair[1]));
        }
        let leaf = path.leaf().unwrap();
        assert!(graph.get(leaf).is_leaf());
    }

    #[test]
    fn test_path_nodes_all_carry_root_winner() {
        let mut graph = build_graph(5);
        let winner = evaluate(&mut graph);

        let path = extract_winning_path(&graph);
        for id in path.iter() {
            assert_eq!(graph.get(id).winner, winner);
        }
        assert!(path.contains(graph.root()));
    }

    #[test]
    fn test_serialization() {
        let mut graph = build_graph(4);
        evaluate(&mut graph);
        let path = extract_winning_path(&graph);

        let json = serde_json::to_string(&path).unwrap();
        let deserialized: WinningPath = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, path);
    }
}

//! Breadth-first construction of the game graph.
//!
//! Expands the state space one layer at a time. Each child state is
//! checked against the states already created in its layer: a hit adds a
//! parent edge to the existing node instead of allocating a duplicate.
//! This merging step is what makes the structure a DAG rather than a
//! tree. Merging is only checked within a layer; the conservation law
//! and the move count make cross-layer coincidence impossible.
//!
//! The per-layer lookup uses a hash table keyed by state, replacing a
//! linear scan of the layer with the same results.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use super::arena::GameGraph;
use super::node::{GameNode, NodeId};
use crate::state::{generate_children, is_terminal, DecompositionState};

/// Build the full reachable state space of the game on `n` ones.
pub fn build_graph(n: u32) -> GameGraph {
    build_from(DecompositionState::initial(n), n)
}

/// Build the reachable state space from an arbitrary root state.
pub fn build_from(root_state: DecompositionState, n: u32) -> GameGraph {
    let mut graph = GameGraph::new(root_state, n);

    let mut frontier: VecDeque<NodeId> = VecDeque::new();
    frontier.push_back(graph.root());

    // States already allocated in the layer below the current parent
    // depth. Cleared whenever the frontier advances a layer.
    let mut layer: FxHashMap<DecompositionState, NodeId> = FxHashMap::default();
    let mut parent_depth = 0u32;
    let mut terminal_count = 0usize;

    while let Some(id) = frontier.pop_front() {
        let depth = graph.get(id).depth;
        if depth > parent_depth {
            debug!(
                depth,
                nodes = graph.len(),
                "advancing to next layer"
            );
            parent_depth = depth;
            layer.clear();
        }

        let state = graph.get(id).state.clone();
        if is_terminal(&state) {
            terminal_count += 1;
            continue;
        }

        for child_state in generate_children(&state) {
            if let Some(&existing) = layer.get(&child_state) {
                // Same state already discovered in this layer via a
                // different move sequence: merge by adding a parent edge.
                graph.link(id, existing);
            } else {
                let child = graph.alloc(GameNode::new(child_state.clone(), depth + 1));
                graph.link(id, child);
                layer.insert(child_state, child);
                frontier.push_back(child);
            }
        }
    }

    info!(
        n,
        nodes = graph.len(),
        max_depth = graph.max_depth(),
        terminal = terminal_count,
        "state space constructed"
    );

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::node::Winner;
    use crate::state::DecompositionState;

    fn state(entries: &[(u32, u32)]) -> DecompositionState {
        DecompositionState::from_entries(entries.iter().copied())
    }

    #[test]
    fn test_build_n1_is_single_terminal_node() {
        let graph = build_graph(1);

        assert_eq!(graph.len(), 1);
        assert!(graph.root_node().is_leaf());
        assert_eq!(graph.root_node().winner, Winner::Undetermined);
    }

    #[test]
    fn test_build_n2_single_move_chain() {
        let graph = build_graph(2);

        assert_eq!(graph.len(), 2);
        let root = graph.root_node();
        assert_eq!(root.children.len(), 1);

        let child = graph.get(root.children[0]);
        assert_eq!(child.state, state(&[(2, 1)]));
        assert_eq!(child.depth, 1);
        assert!(child.is_leaf());
    }

    #[test]
    fn test_depth_equals_discovery_layer() {
        let graph = build_graph(6);

        for (id, node) in graph.iter() {
            for &child in &node.children {
                assert_eq!(
                    graph.get(child).depth,
                    node.depth + 1,
                    "edge {id} -> {child} must descend exactly one layer"
                );
            }
        }
    }

    #[test]
    fn test_no_equal_states_within_layer() {
        let graph = build_graph(7);

        for depth in 0..=graph.max_depth() {
            let layer: Vec<_> = graph.layer(depth).collect();
            for (i, (_, a)) in layer.iter().enumerate() {
                for (_, b) in layer.iter().skip(i + 1) {
                    assert_ne!(a.state, b.state, "duplicate state at depth {depth}");
                }
            }
        }
    }

    #[test]
    fn test_merge_creates_second_parent_edge() {
        // On n = 5, {2:1, 3:1} at depth 3 is reachable from both depth-2
        // states: sum(1) on {1:1, 2:2} and combine on {1:2, 3:1}.
        let graph = build_graph(5);

        let (merged, node) = graph
            .iter()
            .find(|(_, node)| node.depth == 3 && node.state == state(&[(2, 1), (3, 1)]))
            .expect("merged state must exist");

        assert_eq!(node.parents.len(), 2, "{merged} should have two parents");

        // Exactly one node carries that state at depth 3.
        let count = graph
            .layer(3)
            .filter(|(_, n)| n.state == state(&[(2, 1), (3, 1)]))
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_conservation_across_graph() {
        for n in 1..=8 {
            let graph = build_graph(n);
            for (_, node) in graph.iter() {
                assert_eq!(node.state.total(), u64::from(n));
            }
        }
    }

    #[test]
    fn test_build_from_mid_game_state() {
        let root = state(&[(1, 1), (2, 2)]);
        let graph = build_from(root.clone(), 6);

        assert_eq!(graph.root_node().state, root);
        assert!(graph.len() > 1);
        for (_, node) in graph.iter() {
            assert_eq!(node.state.total(), 6);
        }
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let a = build_graph(7);
        let b = build_graph(7);

        assert_eq!(a.len(), b.len());
        for ((_, na), (_, nb)) in a.iter().zip(b.iter()) {
            assert_eq!(na.state, nb.state);
            assert_eq!(na.depth, nb.depth);
            assert_eq!(na.children, nb.children);
            assert_eq!(na.parents, nb.parents);
        }
    }
}

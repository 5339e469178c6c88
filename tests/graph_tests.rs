//! Structural invariants of the constructed state-space graph.

use zeckendorf_game::{
    build_graph, evaluate, DecompositionState, GameGraph, NodeId, Winner,
};

fn state(entries: &[(u32, u32)]) -> DecompositionState {
    DecompositionState::from_entries(entries.iter().copied())
}

// =============================================================================
// Conservation
// =============================================================================

#[test]
fn test_every_reachable_state_conserves_n() {
    for n in 1..=10 {
        let graph = build_graph(n);
        for (id, node) in graph.iter() {
            assert_eq!(
                node.state.total(),
                u64::from(n),
                "node {id} of game {n} broke conservation"
            );
        }
    }
}

// =============================================================================
// Layering and Merging
// =============================================================================

#[test]
fn test_edges_descend_exactly_one_layer() {
    let graph = build_graph(9);

    for (_, node) in graph.iter() {
        for &child in &node.children {
            assert_eq!(graph.get(child).depth, node.depth + 1);
        }
        for &parent in &node.parents {
            assert_eq!(graph.get(parent).depth + 1, node.depth);
        }
    }
}

#[test]
fn test_layers_hold_distinct_states() {
    let graph = build_graph(9);

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
fn test_equal_length_sequences_merge_into_one_node() {
    // On n = 5 the state {2:1, 3:1} arises at depth 3 from two distinct
    // depth-2 ancestors; the graph must hold a single node with both
    // parent edges rather than two copies.
    let graph = build_graph(5);

    let hits: Vec<(NodeId, usize)> = graph
        .layer(3)
        .filter(|(_, node)| node.state == state(&[(2, 1), (3, 1)]))
        .map(|(id, node)| (id, node.parents.len()))
        .collect();

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].1, 2);
}

#[test]
fn test_larger_games_do_merge() {
    let graph = build_graph(8);
    let stats = graph.stats();

    assert!(stats.merged_count > 0, "expected multi-parent nodes");
    assert!(stats.edge_count > graph.len() - 1, "a DAG with merges has more edges than a tree");
}

#[test]
fn test_parent_and_child_lists_are_mirror_images() {
    let graph = build_graph(8);

    for (id, node) in graph.iter() {
        for &child in &node.children {
            assert!(graph.get(child).parents.contains(&id));
        }
        for &parent in &node.parents {
            assert!(graph.get(parent).children.contains(&id));
        }
    }
}

// =============================================================================
// Stats
// =============================================================================

#[test]
fn test_stats_count_structure() {
    let graph = build_graph(6);
    let stats = graph.stats();

    assert_eq!(stats.node_count, graph.len());
    assert_eq!(stats.max_depth, graph.max_depth());
    assert_eq!(
        stats.leaf_count,
        graph.iter().filter(|(_, n)| n.is_leaf()).count()
    );
    assert_eq!(
        stats.edge_count,
        graph.iter().map(|(_, n)| n.children.len()).sum::<usize>()
    );
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn test_evaluated_graph_round_trips_through_json() {
    let mut graph = build_graph(5);
    evaluate(&mut graph);

    let json = serde_json::to_string(&graph).unwrap();
    let restored: GameGraph = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.len(), graph.len());
    assert_eq!(restored.n(), graph.n());
    for ((_, a), (_, b)) in graph.iter().zip(restored.iter()) {
        assert_eq!(a.state, b.state);
        assert_eq!(a.depth, b.depth);
        assert_eq!(a.winner, b.winner);
        assert_eq!(a.chosen_child, b.chosen_child);
    }
    assert_ne!(restored.root_node().winner, Winner::Undetermined);
}

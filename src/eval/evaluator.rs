//! Backward-induction valuation of the game graph.
//!
//! Computes each node's winner from its children's winners, alternating
//! maximizing and minimizing by depth parity. The traversal is an
//! explicit-stack post-order rather than native recursion, so evaluation
//! depth is bounded by heap memory and not the call stack.
//!
//! Winners are memoized write-once in the arena. Because edges strictly
//! increase depth the computation is well-founded, and the final winner
//! of every node is independent of evaluation order. Alongside the
//! winner, each internal node records a chosen strategic child: the
//! first child whose winner matches its own. The winning-path walk
//! follows these links in a separate pass, so valuation itself keeps no
//! shared path state.

use tracing::debug;

use crate::graph::{GameGraph, NodeId, Player, Winner};

/// Evaluate the whole graph and return the root's winner.
///
/// Every node reachable from the root (which is every node in the
/// graph) has its winner assigned afterwards.
pub fn evaluate(graph: &mut GameGraph) -> Winner {
    let root = graph.root();
    let winner = value(graph, root);
    debug!(
        nodes = graph.len(),
        winner = ?winner,
        "graph evaluated"
    );
    winner
}

/// Compute the winner of one node, memoizing every node visited on the
/// way. Repeated calls on any node always agree with the first.
pub fn value(graph: &mut GameGraph, start: NodeId) -> Winner {
    let mut stack: Vec<NodeId> = vec![start];

    while let Some(&id) = stack.last() {
        if graph.get(id).winner != Winner::Undetermined {
            stack.pop();
            continue;
        }

        // Shared children may already be valued via another parent;
        // only the still-undetermined ones need a visit.
        let pending: Vec<NodeId> = graph
            .get(id)
            .children
            .iter()
            .copied()
            .filter(|&child| graph.get(child).winner == Winner::Undetermined)
            .collect();

        if pending.is_empty() {
            let (winner, chosen) = resolve(graph, id);
            graph.get_mut(id).assign_winner(winner, chosen);
            stack.pop();
        } else {
            stack.extend(pending);
        }
    }

    graph.get(start).winner
}

/// Decide a node whose children are all valued.
fn resolve(graph: &GameGraph, id: NodeId) -> (Winner, NodeId) {
    let node = graph.get(id);

    if node.children.is_empty() {
        // Terminal by structure: the player who would move next has no
        // move and loses. Odd depth means Player Two is on the move.
        let winner = if node.depth % 2 == 1 {
            Winner::PlayerOne
        } else {
            Winner::PlayerTwo
        };
        return (winner, NodeId::NONE);
    }

    let mover = Player::to_move(node.depth);
    let target = mover.winner();

    let winner = if node
        .children
        .iter()
        .any(|&child| graph.get(child).winner == target)
    {
        target
    } else {
        mover.opponent().winner()
    };

    // If the mover wins, some child carries their win; if the mover
    // loses, every child carries the opponent's. Either way the first
    // match is a valid forced-play continuation.
    let chosen = node
        .children
        .iter()
        .copied()
        .find(|&child| graph.get(child).winner == winner)
        .unwrap_or(NodeId::NONE);

    (winner, chosen)
}

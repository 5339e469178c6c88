//! Arena-based game graph.
//!
//! Uses a flat `Vec<GameNode>` with index-based references for
//! efficiency, cache-friendliness, and serializability. The arena is the
//! sole owner of every node; parent/child relations are `NodeId` lists.

use serde::{Deserialize, Serialize};

use super::node::{GameNode, NodeId};
use crate::state::DecompositionState;

/// The layered DAG of reachable game states.
///
/// Nodes are stored in a flat vector and referenced by `NodeId` indices.
/// The root is always `NodeId(0)`. Within one depth layer no two nodes
/// hold structurally equal states.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameGraph {
    /// All nodes in the graph, in allocation (BFS discovery) order.
    nodes: Vec<GameNode>,

    /// The root node ID (always 0 after initialization).
    root: NodeId,

    /// The conserved game total: every state in the graph sums to `n`.
    n: u32,
}

impl GameGraph {
    /// Create a new graph holding only the root state.
    pub fn new(root_state: DecompositionState, n: u32) -> Self {
        let mut graph = Self {
            nodes: Vec::with_capacity(64),
            root: NodeId::new(0),
            n,
        };
        graph.nodes.push(GameNode::root(root_state));
        graph
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The game total shared by every state in the graph.
    #[must_use]
    pub fn n(&self) -> u32 {
        self.n
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &GameNode {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut GameNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node, returning its ID.
    pub fn alloc(&mut self, node: GameNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Link `parent` to `child`, maintaining both direction lists.
    pub fn link(&mut self, parent: NodeId, child: NodeId) {
        self.get_mut(parent).children.push(child);
        self.get_mut(child).parents.push(parent);
    }

    /// Number of nodes in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the graph is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &GameNode {
        self.get(self.root)
    }

    /// Iterate over all nodes in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &GameNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// Iterate over the nodes of one depth layer.
    pub fn layer(&self, depth: u32) -> impl Iterator<Item = (NodeId, &GameNode)> {
        self.iter().filter(move |(_, node)| node.depth == depth)
    }

    /// Maximum depth of any node (the length of the longest game).
    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    /// Get statistics about the graph.
    #[must_use]
    pub fn stats(&self) -> GraphStats {
        let leaf_count = self.nodes.iter().filter(|n| n.is_leaf()).count();
        let edge_count: usize = self.nodes.iter().map(|n| n.children.len()).sum();
        let merged_count = self.nodes.iter().filter(|n| n.parents.len() > 1).count();

        GraphStats {
            node_count: self.nodes.len(),
            max_depth: self.max_depth(),
            leaf_count,
            edge_count,
            merged_count,
        }
    }
}

/// Statistics about a constructed game graph.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GraphStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Maximum depth reached (the longest possible game).
    pub max_depth: u32,

    /// Number of leaf nodes (states with no successors).
    pub leaf_count: usize,

    /// Total number of parent-to-child edges.
    pub edge_count: usize,

    /// Nodes with more than one parent (merged states).
    pub merged_count: usize,
}

impl GraphStats {
    /// Average number of children per node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.node_count == 0 {
            0.0
        } else {
            self.edge_count as f64 / self.node_count as f64
        }
    }
}

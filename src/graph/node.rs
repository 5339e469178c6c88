//! Graph nodes and player/winner types.
//!
//! Nodes live in the `GameGraph` arena and reference each other through
//! `NodeId` handles. Parent and child lists are non-owning: the arena
//! alone owns every node, so the multi-parent DAG needs no reference
//! counting and cannot form ownership cycles.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::state::DecompositionState;

/// Index into the `GameGraph` node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The player whose turn it is at a node of the given depth.
    ///
    /// Player One moves at even depths (the root is depth 0).
    #[must_use]
    pub const fn to_move(depth: u32) -> Player {
        if depth % 2 == 0 {
            Player::One
        } else {
            Player::Two
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// This player's winner value.
    #[must_use]
    pub const fn winner(self) -> Winner {
        match self {
            Player::One => Winner::PlayerOne,
            Player::Two => Winner::PlayerTwo,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// Winner value of a node: undetermined until evaluated, then fixed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    #[default]
    Undetermined,
    PlayerOne,
    PlayerTwo,
}

impl Winner {
    /// The winning player, if determined.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Winner::Undetermined => None,
            Winner::PlayerOne => Some(Player::One),
            Winner::PlayerTwo => Some(Player::Two),
        }
    }
}

/// A node in the game graph.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameNode {
    /// The decomposition at this node.
    pub state: DecompositionState,

    /// Number of moves from the root. Well-defined because the graph is
    /// layered: all root paths to a node have equal length.
    pub depth: u32,

    /// Winner under best play from this node. Write-once: assigned by
    /// the evaluator and never revised.
    pub winner: Winner,

    /// The child the evaluator picked as the forced-play continuation
    /// (NONE for leaves and unevaluated nodes).
    pub chosen_child: NodeId,

    /// Parent handles. More than one when move sequences merge.
    pub parents: SmallVec<[NodeId; 4]>,

    /// Child handles.
    pub children: SmallVec<[NodeId; 8]>,
}

impl GameNode {
    /// Create a new node at the given depth.
    pub fn new(state: DecompositionState, depth: u32) -> Self {
        Self {
            state,
            depth,
            winner: Winner::Undetermined,
            chosen_child: NodeId::NONE,
            parents: SmallVec::new(),
            children: SmallVec::new(),
        }
    }

    /// Create a root node (depth 0).
    pub fn root(state: DecompositionState) -> Self {
        Self::new(state, 0)
    }

    /// True if this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The player to move at this node.
    #[must_use]
    pub fn to_move(&self) -> Player {
        Player::to_move(self.depth)
    }

    /// Assign the winner and chosen child. The winner slot is
    /// write-once; reassigning the same value is a no-op.
    pub fn assign_winner(&mut self, winner: Winner, chosen_child: NodeId) {
        debug_assert!(
            self.winner == Winner::Undetermined || self.winner == winner,
            "winner reassigned from {:?} to {:?}",
            self.winner,
            winner
        );
        if self.winner == Winner::Undetermined {
            self.winner = winner;
            self.chosen_child = chosen_child;
        }
    }
}

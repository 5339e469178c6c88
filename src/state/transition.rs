//! Move rules of the decomposition game.
//!
//! Three rewrite moves act on a state, each conserving the weighted
//! total because of the Fibonacci recurrence:
//!
//! - **Sum consecutive**: one unit each at `index` and `index + 1`
//!   become one unit at `index + 2`.
//! - **Split pair**: two units at `index` (for `index >= 2`) become one
//!   unit at `index - 2` and one at `index + 1`, since
//!   `2·fib(k) = fib(k-2) + fib(k+1)`. At `index == 2` this produces the
//!   emergent index 0 (`fib(0) = 1`).
//! - **Combine ones**: two units at index 1 become one unit at index 2.
//!
//! Inapplicable moves are not errors: applying one yields `None`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::decomposition::DecompositionState;

/// One move of the decomposition game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Sum one unit at `index` with one at `index + 1` into `index + 2`.
    SumConsecutive { index: u32 },
    /// Split two units at `index` into one at `index - 2` and one at
    /// `index + 1`.
    SplitPair { index: u32 },
    /// Combine two units at index 1 into one at index 2.
    CombineOnes,
}

impl Move {
    /// Apply this move to a state, or `None` if it is not applicable.
    #[must_use]
    pub fn apply(self, state: &DecompositionState) -> Option<DecompositionState> {
        match self {
            Move::SumConsecutive { index } => sum_consecutive(state, index),
            Move::SplitPair { index } => split_pair(state, index),
            Move::CombineOnes => combine_ones(state),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::SumConsecutive { index } => write!(f, "sum({index}, {})", index + 1),
            Move::SplitPair { index } => write!(f, "split({index})"),
            Move::CombineOnes => write!(f, "combine(1, 1)"),
        }
    }
}

/// Sum one unit at `index` with one at `index + 1` into one at
/// `index + 2`. Requires at least one unit at each of the two indices.
#[must_use]
pub fn sum_consecutive(state: &DecompositionState, index: u32) -> Option<DecompositionState> {
    if state.count(index) == 0 || state.count(index + 1) == 0 {
        return None;
    }

    let mut next = state.clone();
    next.bump(index, -1);
    next.bump(index + 1, -1);
    next.bump(index + 2, 1);
    Some(next)
}

/// Split two units at `index` into one at `index - 2` and one at
/// `index + 1`. Requires `index >= 2` and at least two units at `index`.
///
/// The general formula holds at `index == 2` as well: the unit lands on
/// the emergent index 0, whose value `fib(0) = 1` keeps the total
/// conserved.
#[must_use]
pub fn split_pair(state: &DecompositionState, index: u32) -> Option<DecompositionState> {
    if index < 2 || state.count(index) < 2 {
        return None;
    }

    let mut next = state.clone();
    next.bump(index, -2);
    next.bump(index - 2, 1);
    next.bump(index + 1, 1);
    Some(next)
}

/// Combine two units at index 1 into one unit at index 2.
#[must_use]
pub fn combine_ones(state: &DecompositionState) -> Option<DecompositionState> {
    if state.count(1) < 2 {
        return None;
    }

    let mut next = state.clone();
    next.bump(1, -2);
    next.bump(2, 1);
    Some(next)
}

/// Decide whether a state admits no further move.
///
/// The lone unit `{1: 1}` is terminal. Any other occurrence at index 1
/// counts as non-terminal (the combine move is checked first). Otherwise
/// the state is non-terminal iff some index holds more than one unit or
/// two adjacent indices are both occupied.
#[must_use]
pub fn is_terminal(state: &DecompositionState) -> bool {
    let entries = state.entries();

    // The minimal nontrivial state: a single 1.
    if entries == [(1, 1)] {
        return true;
    }

    if state.count(1) > 0 {
        return false;
    }

    for (index, count) in entries {
        if count > 1 {
            return false;
        }
        if state.count(index + 1) > 0 {
            return false;
        }
    }

    true
}

/// Enumerate all applicable moves in a fixed order: ascending index,
/// split before sum at each index, combine last.
#[must_use]
pub fn legal_moves(state: &DecompositionState) -> Vec<Move> {
    let mut moves = Vec::new();

    for index in state.indices() {
        if index >= 2 && state.count(index) >= 2 {
            moves.push(Move::SplitPair { index });
        }
        if state.count(index) > 0 && state.count(index + 1) > 0 {
            moves.push(Move::SumConsecutive { index });
        }
    }

    if state.count(1) >= 2 {
        moves.push(Move::CombineOnes);
    }

    moves
}

/// All distinct states reachable from `state` in exactly one move.
///
/// Results equal to the source state are discarded, and two moves that
/// happen to produce structurally identical states contribute a single
/// entry.
#[must_use]
pub fn generate_children(state: &DecompositionState) -> Vec<DecompositionState> {
    let mut children: Vec<DecompositionState> = Vec::new();

    for mv in legal_moves(state) {
        if let Some(next) = mv.apply(state) {
            if next == *state {
                continue;
            }
            if children.contains(&next) {
                continue;
            }
            children.push(next);
        }
    }

    children
}

/// True iff `candidate` is reachable from `state` in exactly one move.
#[must_use]
pub fn is_successor(state: &DecompositionState, candidate: &DecompositionState) -> bool {
    generate_children(state).contains(candidate)
}

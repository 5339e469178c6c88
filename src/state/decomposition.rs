//! Decomposition states: multisets of Fibonacci units.
//!
//! A `DecompositionState` maps Fibonacci indices to occurrence counts.
//! Index 1 has value 1, with `fib(0) = fib(1) = 1` and
//! `fib(k) = fib(k-1) + fib(k-2)`. The weighted total
//! Σ count × fib(index) is conserved by every move, so all states
//! reachable in one game share the same total.
//!
//! States are immutable once published: each move application produces a
//! fresh state. The counts are backed by `im::HashMap`, so cloning a
//! state is O(1) and move application only pays for the touched entries.

use std::fmt;
use std::hash::{Hash, Hasher};

use im::HashMap as ImHashMap;
use serde::{Deserialize, Serialize};

/// The `index`-th Fibonacci number, with `fib(0) = fib(1) = 1`.
#[must_use]
pub fn fib(index: u32) -> u64 {
    let (mut a, mut b) = (1u64, 1u64);
    for _ in 1..index {
        let next = a + b;
        a = b;
        b = next;
    }
    b
}

/// A multiset of Fibonacci units, keyed by Fibonacci index.
///
/// Equality is structural over the union of both sides' keys: a key
/// missing from one side is read as count 0, so `{1:0, 2:1}` and `{2:1}`
/// are equal. Hashing covers only nonzero entries, keeping it consistent
/// with equality.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DecompositionState {
    counts: ImHashMap<u32, u32>,
}

impl DecompositionState {
    /// The starting state of the game on `n` ones: `{1: n}`.
    #[must_use]
    pub fn initial(n: u32) -> Self {
        let mut counts = ImHashMap::new();
        counts.insert(1, n);
        Self { counts }
    }

    /// Build a state from explicit (index, count) entries.
    ///
    /// Zero counts are kept as written; they do not affect equality,
    /// hashing, or iteration.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = (u32, u32)>) -> Self {
        Self {
            counts: entries.into_iter().collect(),
        }
    }

    /// Occurrence count at a Fibonacci index (0 if absent).
    #[must_use]
    pub fn count(&self, index: u32) -> u32 {
        self.counts.get(&index).copied().unwrap_or(0)
    }

    /// Nonzero (index, count) entries in ascending index order.
    #[must_use]
    pub fn entries(&self) -> Vec<(u32, u32)> {
        let mut entries: Vec<(u32, u32)> = self
            .counts
            .iter()
            .filter(|(_, &count)| count > 0)
            .map(|(&index, &count)| (index, count))
            .collect();
        entries.sort_unstable();
        entries
    }

    /// Indices with nonzero count, ascending.
    #[must_use]
    pub fn indices(&self) -> Vec<u32> {
        self.entries().into_iter().map(|(index, _)| index).collect()
    }

    /// Total number of units in the multiset (Σ counts).
    #[must_use]
    pub fn unit_count(&self) -> u64 {
        self.counts.values().map(|&count| u64::from(count)).sum()
    }

    /// Weighted total Σ count × fib(index).
    ///
    /// This is the conserved quantity: every reachable state of a game on
    /// `n` ones has total `n`.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts
            .iter()
            .map(|(&index, &count)| u64::from(count) * fib(index))
            .sum()
    }

    /// True if no unit is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.values().all(|&count| count == 0)
    }

    /// Adjust the count at `index` by `delta`, removing the entry if the
    /// result is zero. Callers are responsible for not underflowing.
    pub(crate) fn bump(&mut self, index: u32, delta: i64) {
        let next = i64::from(self.count(index)) + delta;
        debug_assert!(next >= 0, "count underflow at index {index}");
        if next <= 0 {
            self.counts.remove(&index);
        } else {
            self.counts.insert(index, next as u32);
        }
    }
}

impl PartialEq for DecompositionState {
    fn eq(&self, other: &Self) -> bool {
        // Symmetric over the union of keys: iterating only one side's
        // keys would miss extra nonzero keys on the other side.
        self.counts
            .keys()
            .chain(other.counts.keys())
            .all(|&index| self.count(index) == other.count(index))
    }
}

impl Eq for DecompositionState {}

impl Hash for DecompositionState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let entries = self.entries();
        entries.len().hash(state);
        for entry in entries {
            entry.hash(state);
        }
    }
}

impl fmt::Display for DecompositionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (index, count)) in self.entries().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{index}: {count}")?;
        }
        write!(f, "}}")
    }
}

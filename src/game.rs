//! Top-level entry point: build, evaluate, and explain one game.

use tracing::info;

use crate::error::GameError;
use crate::eval::{evaluate, extract_winning_path, WinningPath};
use crate::graph::{build_graph, GameGraph, Player, Winner};

/// The solved game: the winner, the full state-space graph, and one
/// forced-play witness line.
///
/// Consumers (e.g. a renderer) read node states, depths, winners,
/// parent/child links, and path membership from here; nothing mutates
/// the outcome after construction.
#[derive(Clone, Debug)]
pub struct GameOutcome {
    /// The player with a forced winning strategy.
    pub winner: Player,

    /// The layered DAG of all reachable states, fully valued.
    pub graph: GameGraph,

    /// One root-to-leaf line witnessing the forced win.
    pub winning_path: WinningPath,
}

/// Play the decomposition game on `n` starting ones.
///
/// Constructs the reachable state space, runs backward induction, and
/// extracts a witness path. Deterministic: the same `n` always yields
/// the same winner and graph shape.
///
/// # Errors
///
/// `GameError::InvalidGameSize` if `n` is zero.
pub fn play_game(n: u32) -> Result<GameOutcome, GameError> {
    if n == 0 {
        return Err(GameError::InvalidGameSize { n });
    }

    let mut graph = build_graph(n);
    let winner = match evaluate(&mut graph) {
        Winner::PlayerOne => Player::One,
        Winner::PlayerTwo => Player::Two,
        Winner::Undetermined => unreachable!("evaluation assigns the root a winner"),
    };
    let winning_path = extract_winning_path(&graph);

    info!(
        n,
        %winner,
        nodes = graph.len(),
        path_moves = winning_path.move_count(),
        "game solved"
    );

    Ok(GameOutcome {
        winner,
        graph,
        winning_path,
    })
}

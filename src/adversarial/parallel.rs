//! Root-parallel game-tree search (`parallel` feature).
//!
//! Root children are independent copies, so they can be scored
//! concurrently. Scores are collected in move order and folded
//! sequentially, which keeps the first-best tie-break of the sequential
//! search. Each child is searched with a full window, so alpha-beta
//! loses root-level pruning.

use super::strategy::{check_root_depth, child, SearchOutcome, Strategy};
use super::types::Game;
use crate::error::SearchError;
use log::debug;
use rayon::prelude::*;

/// Scores every root move on the rayon pool and returns the best one.
pub fn par_search<S, G>(strategy: &S, game: &G, depth: u32) -> Result<SearchOutcome<G::Move>, SearchError>
where
    S: Strategy + Sync,
    G: Game + Send + Sync,
    G::Move: Send + Sync,
{
    check_root_depth(strategy, depth)?;

    let moves = game.legal_moves();
    let scored: Vec<Result<(i32, u64), SearchError>> = moves
        .par_iter()
        .map(|mv| {
            let next = child(game, mv)?;
            let mut nodes = 1u64;
            let score = strategy.solve_counted(&next, depth.saturating_sub(1), false, &mut nodes)?;
            Ok((score, nodes))
        })
        .collect();

    let mut best_move = None;
    let mut best_score = i32::MIN;
    let mut nodes = 0u64;
    for (mv, result) in moves.into_iter().zip(scored) {
        let (score, visited) = result?;
        nodes += visited;
        if best_move.is_none() || score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
    }

    if best_move.is_none() {
        best_score = game.evaluate();
    }

    debug!(
        "{} (parallel root): best score {} after {} nodes",
        strategy.name(),
        best_score,
        nodes
    );

    Ok(SearchOutcome {
        best_move,
        score: best_score,
        nodes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adversarial::{AlphaBeta, Minimax};
    use crate::problems::TicTacToe;

    #[test]
    fn test_parallel_matches_sequential_choice() {
        let game = TicTacToe::new();
        let sequential = Minimax::new().search(&game, 9).unwrap();
        let parallel = par_search(&AlphaBeta::new(), &game, 9).unwrap();
        assert_eq!(parallel.best_move, sequential.best_move);
        assert_eq!(parallel.score, sequential.score);
    }

    #[test]
    fn test_parallel_minimax_counts_same_nodes() {
        let game = TicTacToe::new();
        let sequential = Minimax::new().search(&game, 9).unwrap();
        let parallel = par_search(&Minimax::new(), &game, 9).unwrap();
        assert_eq!(parallel.nodes, sequential.nodes);
    }
}
